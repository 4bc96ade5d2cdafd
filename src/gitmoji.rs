//! `:shortcode:` to emoji resolution for the gitmoji vocabulary.
//!
//! Resolving shortcodes before the inline-code repair runs shortens messages considerably
//! (`:technologist:` is fourteen units, its emoji is one grapheme).

use std::sync::LazyLock;

use regex::{Captures, Regex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gitmoji {
    pub emoji: &'static str,
    /// Full shortcode, colons included.
    pub code: &'static str,
    pub name: &'static str,
}

macro_rules! gitmojis {
    ($($emoji:literal $name:literal),* $(,)?) => {
        &[$(Gitmoji {
            emoji: $emoji,
            code: concat!(":", $name, ":"),
            name: $name,
        }),*]
    };
}

pub static GITMOJIS: &[Gitmoji] = gitmojis![
    "\u{1F3A8}" "art",
    "\u{26A1}\u{FE0F}" "zap",
    "\u{1F525}" "fire",
    "\u{1F41B}" "bug",
    "\u{1F691}\u{FE0F}" "ambulance",
    "\u{2728}" "sparkles",
    "\u{1F4DD}" "memo",
    "\u{1F680}" "rocket",
    "\u{1F484}" "lipstick",
    "\u{1F389}" "tada",
    "\u{2705}" "white_check_mark",
    "\u{1F512}\u{FE0F}" "lock",
    "\u{1F510}" "closed_lock_with_key",
    "\u{1F516}" "bookmark",
    "\u{1F6A8}" "rotating_light",
    "\u{1F6A7}" "construction",
    "\u{1F49A}" "green_heart",
    "\u{2B07}\u{FE0F}" "arrow_down",
    "\u{2B06}\u{FE0F}" "arrow_up",
    "\u{1F4CC}" "pushpin",
    "\u{1F477}" "construction_worker",
    "\u{1F4C8}" "chart_with_upwards_trend",
    "\u{267B}\u{FE0F}" "recycle",
    "\u{2795}" "heavy_plus_sign",
    "\u{2796}" "heavy_minus_sign",
    "\u{1F527}" "wrench",
    "\u{1F528}" "hammer",
    "\u{1F310}" "globe_with_meridians",
    "\u{270F}\u{FE0F}" "pencil2",
    "\u{1F4A9}" "poop",
    "\u{23EA}\u{FE0F}" "rewind",
    "\u{1F500}" "twisted_rightwards_arrows",
    "\u{1F4E6}\u{FE0F}" "package",
    "\u{1F47D}\u{FE0F}" "alien",
    "\u{1F69A}" "truck",
    "\u{1F4C4}" "page_facing_up",
    "\u{1F4A5}" "boom",
    "\u{1F371}" "bento",
    "\u{267F}\u{FE0F}" "wheelchair",
    "\u{1F4A1}" "bulb",
    "\u{1F37B}" "beers",
    "\u{1F4AC}" "speech_balloon",
    "\u{1F5C3}\u{FE0F}" "card_file_box",
    "\u{1F50A}" "loud_sound",
    "\u{1F507}" "mute",
    "\u{1F465}" "busts_in_silhouette",
    "\u{1F6B8}" "children_crossing",
    "\u{1F3D7}\u{FE0F}" "building_construction",
    "\u{1F4F1}" "iphone",
    "\u{1F921}" "clown_face",
    "\u{1F95A}" "egg",
    "\u{1F648}" "see_no_evil",
    "\u{1F4F8}" "camera_flash",
    "\u{2697}\u{FE0F}" "alembic",
    "\u{1F50D}\u{FE0F}" "mag",
    "\u{1F3F7}\u{FE0F}" "label",
    "\u{1F331}" "seedling",
    "\u{1F6A9}" "triangular_flag_on_post",
    "\u{1F945}" "goal_net",
    "\u{1F4AB}" "dizzy",
    "\u{1F5D1}\u{FE0F}" "wastebasket",
    "\u{1F6C2}" "passport_control",
    "\u{1FA79}" "adhesive_bandage",
    "\u{1F9D0}" "monocle_face",
    "\u{26B0}\u{FE0F}" "coffin",
    "\u{1F9EA}" "test_tube",
    "\u{1F454}" "necktie",
    "\u{1FA7A}" "stethoscope",
    "\u{1F9F1}" "bricks",
    "\u{1F9D1}\u{200D}\u{1F4BB}" "technologist",
    "\u{1F4B8}" "money_with_wings",
    "\u{1F9F5}" "thread",
    "\u{1F9BA}" "safety_vest",
    "\u{2708}\u{FE0F}" "airplane",
];

static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":[A-Za-z0-9_]+:").expect("shortcode pattern is valid"));

pub fn find_gitmoji(code: &str) -> Option<&'static Gitmoji> {
    GITMOJIS.iter().find(|g| g.code == code)
}

/// Emoji for an exact `:code:` token; anything unrecognised comes back as-is.
pub fn resolve_gitmoji_code(code: &str) -> &str {
    find_gitmoji(code).map_or(code, |g| g.emoji)
}

/// Replace every known `:code:` token in `message` with its emoji.
pub fn resolve_gitmojis(message: &str) -> String {
    SHORTCODE
        .replace_all(message, |caps: &Captures<'_>| {
            resolve_gitmoji_code(&caps[0]).to_string()
        })
        .into_owned()
}
