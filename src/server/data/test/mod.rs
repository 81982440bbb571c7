mod property;
mod property_image;
