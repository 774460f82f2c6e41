pub mod dry_wet;
