mod catalog;
mod item_instance;
mod pack_resource;
