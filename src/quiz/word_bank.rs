pub struct Category {
    pub key: &'static str,
    pub hint: Option<&'static str>,
    pub fallback_img: Option<&'static str>,
    pub words: &'static [&'static str],
}

impl Category {
    pub fn hint(&self) -> &'static str {
        self.hint.unwrap_or("thing")
    }
}

/// Case-insensitive, surrounding whitespace ignored.
pub fn find_category(raw: &str) -> Option<&'static Category> {
    let needle = raw.trim();
    WORD_BANK
        .iter()
        .find(|category| category.key.eq_ignore_ascii_case(needle))
}

pub static WORD_BANK: &[Category] = &[
    Category {
        key: "fruits",
        hint: Some("fruit"),
        fallback_img: Some(
            "https://images.unsplash.com/photo-1502741126161-b048400d0853?auto=format&w=800&q=80",
        ),
        words: &[
            "apple", "banana", "grape", "orange", "mango", "peach", "pear", "kiwi", "lemon",
            "lime", "papaya", "plum", "apricot", "cherry", "melon", "coconut", "fig", "guava",
            "blueberry", "raspberry", "strawberry", "pineapple", "pomegranate",
        ],
    },
    Category {
        key: "sports",
        hint: Some("sport"),
        fallback_img: Some(
            "https://images.unsplash.com/photo-1517649763962-0c623066013b?auto=format&w=800&q=80",
        ),
        words: &[
            "soccer", "baseball", "basketball", "tennis", "golf", "boxing", "running", "skiing",
            "swimming", "volleyball", "rugby", "badminton", "cricket", "hockey", "cycling",
            "fencing", "surfing", "archery", "wrestling", "skating",
        ],
    },
    Category {
        key: "objects",
        hint: Some("object item"),
        fallback_img: Some(
            "https://images.unsplash.com/photo-1518779578993-ec3579fee39f?auto=format&w=800&q=80",
        ),
        words: &[
            "table", "chair", "computer", "pencil", "bottle", "phone", "clock", "book", "camera",
            "scissors", "keyboard", "monitor", "backpack", "umbrella", "wallet", "glasses",
            "laptop", "toothbrush", "microwave", "refrigerator",
        ],
    },
    Category {
        key: "animals",
        hint: Some("animal"),
        fallback_img: Some(
            "https://images.unsplash.com/photo-1511203466129-824e631920d4?auto=format&w=800&q=80",
        ),
        words: &[
            "tiger", "elephant", "monkey", "rabbit", "zebra", "giraffe", "panda", "fox", "bear",
            "lion", "dog", "cat", "horse", "dolphin", "whale", "eagle", "shark", "kangaroo",
            "penguin", "owl",
        ],
    },
    Category {
        key: "tools",
        hint: Some("tool"),
        fallback_img: Some(
            "https://images.unsplash.com/photo-1530124566582-a618bc2615dc?auto=format&w=800&q=80",
        ),
        words: &[
            "hammer", "screwdriver", "wrench", "saw", "drill", "pliers", "shovel", "rake",
            "ladder", "axe", "chisel", "tape", "level", "file", "clamp", "brush", "knife",
            "flashlight", "toolbox", "nail",
        ],
    },
    Category {
        key: "foods",
        hint: Some("food"),
        fallback_img: Some(
            "https://images.unsplash.com/photo-1504674900247-0877df9cc836?auto=format&w=800&q=80",
        ),
        words: &[
            "pizza", "burger", "sandwich", "noodle", "rice", "bread", "cheese", "soup", "salad",
            "pasta", "steak", "sushi", "taco", "pancake", "cookie", "donut", "egg", "chicken",
            "dumpling", "cake",
        ],
    },
    Category {
        key: "jobs",
        hint: Some("job person"),
        fallback_img: None,
        words: &[
            "doctor", "nurse", "teacher", "farmer", "chef", "pilot", "police", "firefighter",
            "dentist", "painter", "singer", "driver", "baker", "soldier", "scientist",
            "engineer", "lawyer", "artist", "mechanic", "waiter",
        ],
    },
    Category {
        key: "nature",
        hint: None,
        fallback_img: None,
        words: &[
            "mountain", "river", "ocean", "forest", "desert", "volcano", "island", "lake",
            "waterfall", "cloud", "rainbow", "flower", "tree", "beach", "valley", "cave",
            "glacier", "meadow", "sunset", "storm",
        ],
    },
];
