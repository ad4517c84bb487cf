pub mod shoelace_area;
