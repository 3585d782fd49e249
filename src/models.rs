//! Frontend Models
//!
//! Static content for the page sections: travel tips, the leaderboard and
//! the emoji palettes offered by the add-item modal.

/// Tip shown on the flip card and as tip of the day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelTip {
    pub id: u32,
    pub title: &'static str,
    /// Markdown body
    pub content: &'static str,
    pub icon: &'static str,
}

/// One-liner tip for the carousel strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickTip {
    pub id: u32,
    pub text: &'static str,
    pub emoji: &'static str,
}

/// Leaderboard row (dummy data)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Packer {
    pub id: u32,
    pub name: &'static str,
    pub trips: u32,
    pub badge: &'static str,
}

pub const TRAVEL_TIPS: &[TravelTip] = &[
    TravelTip {
        id: 1,
        title: "Roll, Don't Fold",
        content: "**Roll** your clothes instead of folding them to save space and reduce wrinkles.",
        icon: "🧣",
    },
    TravelTip {
        id: 2,
        title: "Packing Cubes",
        content: "Use *packing cubes* to organize your suitcase and compress your clothes.",
        icon: "📦",
    },
    TravelTip {
        id: 3,
        title: "Heavy Items at the Bottom",
        content: "Pack **heavier items** at the bottom of your suitcase for better balance.",
        icon: "⚖️",
    },
    TravelTip {
        id: 4,
        title: "Essentials in Carry-on",
        content: "Keep medications, valuables, and a change of clothes in your **carry-on**.",
        icon: "💊",
    },
    TravelTip {
        id: 5,
        title: "Digital Copies",
        content: "Keep *digital copies* of important documents in your email or cloud storage.",
        icon: "📱",
    },
    TravelTip {
        id: 6,
        title: "Dryer Sheets",
        content: "Pack a dryer sheet in your suitcase to keep clothes smelling fresh.",
        icon: "👃",
    },
];

pub const QUICK_TIPS: &[QuickTip] = &[
    QuickTip { id: 1, text: "Roll your clothes to save space!", emoji: "👕" },
    QuickTip { id: 2, text: "Keep a digital and physical copy of your passport.", emoji: "🛂" },
    QuickTip { id: 3, text: "Always pack an extra pair of socks.", emoji: "🧦" },
    QuickTip { id: 4, text: "Use packing cubes to organize your suitcase.", emoji: "🧳" },
    QuickTip { id: 5, text: "Pack a portable charger for your devices.", emoji: "🔋" },
    QuickTip { id: 6, text: "Bring a reusable water bottle to stay hydrated.", emoji: "💧" },
    QuickTip { id: 7, text: "Take photos of important documents as backups.", emoji: "📷" },
    QuickTip { id: 8, text: "Pack a small first-aid kit for emergencies.", emoji: "🩹" },
    QuickTip { id: 9, text: "Wear your bulkiest items during travel to save space.", emoji: "👟" },
    QuickTip { id: 10, text: "Use shower caps to cover the bottoms of shoes.", emoji: "👞" },
];

pub const LEADERBOARD: &[Packer] = &[
    Packer { id: 1, name: "Alex Johnson", trips: 12, badge: "🦄 Ultra Packer" },
    Packer { id: 2, name: "Sam Rivera", trips: 10, badge: "🧳 Speedy Suitcaser" },
    Packer { id: 3, name: "Taylor Kim", trips: 8, badge: "✈️ Frequent Flyer" },
    Packer { id: 4, name: "Jordan Lee", trips: 7, badge: "🌍 Globe Trotter" },
    Packer { id: 5, name: "Casey Morgan", trips: 6, badge: "🏝️ Beach Hopper" },
];

/// Medal for the top three places (0-based rank)
pub fn medal(rank: usize) -> Option<&'static str> {
    match rank {
        0 => Some("🥇"),
        1 => Some("🥈"),
        2 => Some("🥉"),
        _ => None,
    }
}

/// Initials for the avatar placeholder
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Emoji choices per category
const EMOJI_PALETTES: &[(&str, &[&str])] = &[
    ("clothing", &["👕", "👖", "🧥", "🧦", "👔", "👗", "🧣", "🧤", "👒", "🩳"]),
    ("toiletries", &["🧴", "🧼", "🪥", "💊", "🧻", "🪒", "🧪", "🧹", "🧷", "🩹"]),
    ("gadgets", &["📱", "💻", "🎧", "📷", "🔌", "🔋", "⌚", "🖱️", "💾", "🎮"]),
    ("documents", &["🛂", "💳", "🎫", "🏨", "📄", "🗺️", "📑", "✉️", "🪪", "📝"]),
    ("essentials", &["👛", "🕶️", "💊", "🧴", "🍫", "🔑", "☂️", "🧢", "🎒", "💧"]),
    ("family", &["👶", "🧸", "🧻", "🧷", "🍼", "🎲", "📚", "🧃", "🛏️", "🎨"]),
];

const DEFAULT_PALETTE: &[&str] = &["📦", "🎒", "🧳", "⭐", "🎁", "🔖", "🧩", "🛍️", "🪄", "✨"];

pub fn emoji_palette(category_id: &str) -> &'static [&'static str] {
    EMOJI_PALETTES
        .iter()
        .find(|(id, _)| *id == category_id)
        .map(|(_, palette)| *palette)
        .unwrap_or(DEFAULT_PALETTE)
}
