//! Built-in item table for Stardew Valley object ids.
//!
//! Names, categories and base sell prices are taken from the game's
//! `Data/Objects` for a handful of common crops, forage, fish, animal
//! products, artisan goods, dishes and fruit. Load a full dataset for
//! anything beyond these.

pub struct WellKnownItem {
    pub id: i32,
    pub name: &'static str,
    pub category: &'static str,
    pub price: i64,
}

#[rustfmt::skip]
const WELL_KNOWN_ITEMS: &[WellKnownItem] = &[
    // Forage
    WellKnownItem { id:  16, name: "Wild Horseradish",  category: "Forage",  price:  50 },
    WellKnownItem { id:  18, name: "Daffodil",          category: "Forage",  price:  30 },
    WellKnownItem { id:  20, name: "Leek",              category: "Forage",  price:  60 },
    WellKnownItem { id:  22, name: "Dandelion",         category: "Forage",  price:  40 },
    WellKnownItem { id: 399, name: "Spring Onion",      category: "Forage",  price:   8 },

    // Crops
    WellKnownItem { id:  24, name: "Parsnip",           category: "Crop",    price:  35 },
    WellKnownItem { id: 188, name: "Green Bean",        category: "Crop",    price:  40 },
    WellKnownItem { id: 190, name: "Cauliflower",       category: "Crop",    price: 175 },
    WellKnownItem { id: 192, name: "Potato",            category: "Crop",    price:  80 },
    WellKnownItem { id: 254, name: "Melon",             category: "Crop",    price: 250 },
    WellKnownItem { id: 256, name: "Tomato",            category: "Crop",    price:  60 },
    WellKnownItem { id: 270, name: "Corn",              category: "Crop",    price:  50 },
    WellKnownItem { id: 276, name: "Pumpkin",           category: "Crop",    price: 320 },

    // Fish
    WellKnownItem { id: 128, name: "Pufferfish",        category: "Fish",    price: 200 },
    WellKnownItem { id: 129, name: "Anchovy",           category: "Fish",    price:  30 },
    WellKnownItem { id: 131, name: "Sardine",           category: "Fish",    price:  40 },
    WellKnownItem { id: 132, name: "Bream",             category: "Fish",    price:  45 },
    WellKnownItem { id: 136, name: "Largemouth Bass",   category: "Fish",    price: 100 },
    WellKnownItem { id: 142, name: "Carp",              category: "Fish",    price:  30 },
    WellKnownItem { id: 145, name: "Sunfish",           category: "Fish",    price:  30 },

    // Animal products
    WellKnownItem { id: 174, name: "Large Egg",         category: "Animal",  price:  95 },
    WellKnownItem { id: 176, name: "Egg",               category: "Animal",  price:  50 },
    WellKnownItem { id: 184, name: "Milk",              category: "Animal",  price: 125 },
    WellKnownItem { id: 186, name: "Large Milk",        category: "Animal",  price: 190 },
    WellKnownItem { id: 440, name: "Wool",              category: "Animal",  price: 340 },

    // Artisan goods
    WellKnownItem { id: 306, name: "Mayonnaise",        category: "Artisan", price: 190 },
    WellKnownItem { id: 340, name: "Honey",             category: "Artisan", price: 100 },
    WellKnownItem { id: 348, name: "Wine",              category: "Artisan", price: 400 },
    WellKnownItem { id: 350, name: "Juice",             category: "Artisan", price: 150 },
    WellKnownItem { id: 424, name: "Cheese",            category: "Artisan", price: 230 },
    WellKnownItem { id: 426, name: "Goat Cheese",       category: "Artisan", price: 400 },

    // Dishes
    WellKnownItem { id: 194, name: "Fried Egg",         category: "Cooking", price:  35 },
    WellKnownItem { id: 195, name: "Omelet",            category: "Cooking", price: 125 },
    WellKnownItem { id: 196, name: "Salad",             category: "Cooking", price: 110 },
    WellKnownItem { id: 216, name: "Bread",             category: "Cooking", price:  60 },

    // Fruit
    WellKnownItem { id: 400, name: "Strawberry",        category: "Fruit",   price: 120 },
    WellKnownItem { id: 613, name: "Apple",             category: "Fruit",   price: 100 },
    WellKnownItem { id: 634, name: "Apricot",           category: "Fruit",   price:  50 },
    WellKnownItem { id: 635, name: "Orange",            category: "Fruit",   price: 100 },
    WellKnownItem { id: 636, name: "Peach",             category: "Fruit",   price: 140 },
    WellKnownItem { id: 637, name: "Pomegranate",       category: "Fruit",   price: 140 },
    WellKnownItem { id: 638, name: "Cherry",            category: "Fruit",   price:  80 },
];

pub fn all() -> &'static [WellKnownItem] {
    WELL_KNOWN_ITEMS
}

pub fn lookup(id: i32) -> Option<&'static WellKnownItem> {
    WELL_KNOWN_ITEMS.iter().find(|item| item.id == id)
}
