mod arrays;
mod json_value;
mod objects;
mod options;
mod primitives;
mod strings;
