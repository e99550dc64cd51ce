pub mod canvas;
pub mod font_list;
pub mod name_prompt;
pub mod section_preview;
