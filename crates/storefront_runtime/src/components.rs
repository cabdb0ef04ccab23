//! Shared views composed by the storefront and admin page crates.

mod banner_carousel;
mod carousel_driver;
mod image_uploader;
mod product_card;
mod product_gallery;
mod site_header;

pub use self::{
    banner_carousel::BannerCarousel,
    carousel_driver::{use_carousel, CarouselHandle},
    image_uploader::{rejection_message, ImageUploader},
    product_card::ProductCard,
    product_gallery::ProductGallery,
    site_header::{SiteFooter, SiteHeader},
};
