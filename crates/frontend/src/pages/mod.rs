pub mod sketcher;
