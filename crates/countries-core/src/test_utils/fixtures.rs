// src/test_utils/fixtures.rs
use crate::models::{Country, Currency, Language};

pub fn country(name: &str) -> Country {
    Country {
        capital: "Mock City".to_string(),
        code: "MC".to_string(),
        currency: Currency::new("MCK", "MockCoin", Some("$")),
        flag: "🏳️".to_string(),
        language: Language::new(Some("mk"), "Mockish"),
        name: name.to_string(),
        region: "Mockland".to_string(),
    }
}

pub fn country_france() -> Country {
    Country {
        capital: "Paris".to_string(),
        code: "FR".to_string(),
        currency: Currency::new("EUR", "Euro", Some("€")),
        flag: "🇫🇷".to_string(),
        language: Language::new(Some("fr"), "French"),
        name: "France".to_string(),
        region: "EU".to_string(),
    }
}

pub fn country_spain() -> Country {
    Country {
        capital: "Madrid".to_string(),
        code: "ES".to_string(),
        currency: Currency::new("EUR", "Euro", None),
        flag: "🇪🇸".to_string(),
        language: Language::new(Some("es"), "Spanish"),
        name: "Spain".to_string(),
        region: "EU".to_string(),
    }
}

pub fn country_no_language_code() -> Country {
    Country {
        capital: "Berlin".to_string(),
        code: "DE".to_string(),
        currency: Currency::new("EUR", "Euro", Some("€")),
        flag: "🇩🇪".to_string(),
        language: Language::new(None, "German"),
        name: "Germany".to_string(),
        region: "EU".to_string(),
    }
}

pub fn country_empty_fields() -> Country {
    Country {
        capital: String::new(),
        code: String::new(),
        currency: Currency::new("", "", None),
        flag: String::new(),
        language: Language::new(None, ""),
        name: String::new(),
        region: String::new(),
    }
}

pub fn country_special_characters() -> Country {
    Country {
        capital: "São Tomé".to_string(),
        code: "ST".to_string(),
        currency: Currency::new("STN", "Dobra", Some("Db")),
        flag: "🇸🇹".to_string(),
        language: Language::new(Some("pt"), "Português"),
        name: "São Tomé and Príncipe".to_string(),
        region: "AF".to_string(),
    }
}

pub fn country_canada() -> Country {
    Country {
        capital: "Ottawa".to_string(),
        code: "CA".to_string(),
        currency: Currency::new("CAD", "Canadian dollar", Some("$")),
        flag: "🇨🇦".to_string(),
        language: Language::new(Some("en"), "English"),
        name: "Canada".to_string(),
        region: "NA".to_string(),
    }
}

pub fn encode(countries: &[Country]) -> Vec<u8> {
    serde_json::to_vec(countries).unwrap()
}
