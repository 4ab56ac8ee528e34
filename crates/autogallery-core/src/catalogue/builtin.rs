/// Built-in sample gallery, used when no catalogue file is configured.
use super::{Catalogue, GalleryItem, ItemKind};
use crate::model::ImageSource;

const PEXELS: &str = "https://images.pexels.com/photos";

fn photo(id: u32) -> ImageSource {
    ImageSource::new(format!("{PEXELS}/{id}/pexels-photo-{id}.jpeg"))
}

fn single(id: &str, title: &str, description: &str, photo_id: u32) -> GalleryItem {
    GalleryItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: None,
        kind: ItemKind::Single {
            image: photo(photo_id),
        },
    }
}

fn before_after(id: &str, title: &str, description: &str, before: u32, after: u32) -> GalleryItem {
    GalleryItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: None,
        kind: ItemKind::BeforeAfter {
            before: photo(before),
            after: photo(after),
        },
    }
}

pub(super) fn sample_catalogue() -> Catalogue {
    Catalogue {
        title: super::DEFAULT_TITLE.to_string(),
        items: vec![
            single("1", "Engine repair", "Full engine rebuild on a Toyota", 190574),
            before_after(
                "ba1",
                "Body restoration",
                "Complete restoration after a collision",
                9626967,
                3778769,
            ),
            single("2", "Paintwork", "Full respray of a Mercedes-Benz", 244553),
            before_after(
                "ba2",
                "Body polishing",
                "Scratch removal and gloss restoration",
                9800012,
                3802510,
            ),
            single("3", "Suspension repair", "Shock absorber and spring replacement", 3807500),
            single("4", "Interior detailing", "Deep clean and trim restoration", 9607184),
            single("5", "Welding", "Sill and underbody repair", 4489731),
            single("6", "Diagnostics", "Computer diagnostics of all systems", 13009432),
        ],
    }
}
