//! Fixed news sources and the public-order keyword list.
//!
//! City lists are keyed by the accent-folded city name; the general
//! sources always follow them, in this order.

use crate::utils::text::fold;

pub const GENERAL_FEEDS: &[&str] = &[
    "https://www.eltiempo.com/rss/colombia.xml",
    "https://www.elespectador.com/rss/colombia/",
    "https://colombia.as.com/rss/seguridad.xml",
    "https://www.kienyke.com/feed",
    "https://elnuevosiglo.com.co/rss.xml",
];

const BOGOTA_FEEDS: &[&str] = &[
    "https://www.eltiempo.com/rss/bogota.xml",
    "https://thebogotapost.com/feed",
    "https://thecitypaperbogota.com/feed",
];

const MEDELLIN_FEEDS: &[&str] = &[
    "https://www.elcolombiano.com/rss",
    "https://www.minuto30.com/feed",
    "https://teleantioquia.co/noticias/feed",
];

const CALI_FEEDS: &[&str] = &[
    "https://occidente.co/feed",
    "https://www.elpais.com.co/rss",
    "https://radiorelojcali.com/noticias/feed",
];

/// Base keyword list for public-order matching. City and department are
/// appended per query; everything is compared accent-folded.
pub const PUBLIC_ORDER_KEYWORDS: &[&str] = &[
    "orden público",
    "seguridad",
    "homicidio",
    "hurto",
    "secuestro",
    "eln",
    "clan del golfo",
    "disidencias",
    "policía",
    "ejército",
];

/// City-specific sources first (when the city has them), then the five
/// general sources.
pub fn feeds_for_city(city: &str) -> Vec<String> {
    let city_feeds: &[&str] = match fold(city).as_str() {
        "bogota" => BOGOTA_FEEDS,
        "medellin" => MEDELLIN_FEEDS,
        "cali" => CALI_FEEDS,
        _ => &[],
    };

    city_feeds
        .iter()
        .chain(GENERAL_FEEDS.iter())
        .map(|s| s.to_string())
        .collect()
}
