pub mod code_map;
