mod image;
mod render;
