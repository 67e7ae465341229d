use super::models::{Catalog, Product};

pub const APP_CATALOG: Catalog = Catalog {
    products: &[
        Product {
            name: "Thermometer",
            description: "This high tech thermometer has a 1 year warranty and is able to detect individual's temperature!",
            price: 23.99,
        },
        Product {
            name: "Pedialite",
            description: "Full of electrolytes and minerals.",
            price: 7.99,
        },
        Product {
            name: "Fidget Spinner",
            description: "Quarantine needs something fun to pass the time.",
            price: 12.99,
        },
        Product {
            name: "Maple Chess Set",
            description: "A chess set made from maple wood.",
            price: 43.95,
        },
        Product {
            name: "Scrabble",
            description: "A board game pitting minds against minds.",
            price: 13.95,
        },
        Product {
            name: "Cards Against Humanity",
            description: "Get your mind in the gutter.",
            price: 14.95,
        },
        Product {
            name: "Hazelenut Coffee",
            description: "Quality Columbian Coffee flavored with Hazelnut.",
            price: 7.99,
        },
        Product {
            name: "Notebook",
            description: "College ruled notebook.",
            price: 3.95,
        },
        Product {
            name: "Playstation 5",
            description: "None of us can afford this.",
            price: 969.99,
        },
        Product {
            name: "Oculus Quest 2 - 256 GB",
            description: "VR Gaming!",
            price: 399.99,
        },
        Product {
            name: "The Office:  The Complete Series",
            description: "Great show!",
            price: 49.99,
        },
        Product {
            name: "MEBERRY Android 10.0 Tablet",
            description: "Ultra-Fast 4GB/RAM, 8000mAh Battery, WiFi",
            price: 159.99,
        },
        Product {
            name: "Yamaha P71 88-Key Piano",
            description: "Digital Piano with sustain pedal, power supply, stand, and bench.",
            price: 458.49,
        },
    ],
};

pub const APP_RESOURCES: &[u8] = include_bytes!(env!("APP_RESOURCES"));
pub const APP_ID: &str = env!("APP_ID");
pub const APP_NAME: &str = env!("APP_NAME");
pub const APP_VERSION: &str = env!("APP_VERSION");
pub const APP_PREFIX: &str = env!("APP_PREFIX");
pub const APP_TITLE: &str = env!("APP_TITLE");
pub const APP_HEADER: &str = "Start Shopping!";
