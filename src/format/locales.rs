use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{MonthNames, MonthStyle};

pub const DEFAULT_LOCALE: &str = "pt-BR";

/// Static month-name table for one language.
#[derive(Debug)]
pub struct MonthTable {
    tag: &'static str,
    long: [&'static str; 12],
    short: [&'static str; 12],
}

impl MonthNames for MonthTable {
    fn language_tag(&self) -> &str {
        self.tag
    }

    fn month_name(&self, month: u32, style: MonthStyle) -> &str {
        let names = match style {
            MonthStyle::Long => &self.long,
            MonthStyle::Short => &self.short,
        };
        month
            .checked_sub(1)
            .and_then(|idx| names.get(idx as usize))
            .copied()
            .unwrap_or("")
    }
}

pub static PT_BR: MonthTable = MonthTable {
    tag: "pt-BR",
    long: [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto",
        "setembro", "outubro", "novembro", "dezembro",
    ],
    short: [
        "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
    ],
};

pub static EN_US: MonthTable = MonthTable {
    tag: "en-US",
    long: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
};

pub static ES_ES: MonthTable = MonthTable {
    tag: "es-ES",
    long: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
        "septiembre", "octubre", "noviembre", "diciembre",
    ],
    short: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
};

pub static FR_FR: MonthTable = MonthTable {
    tag: "fr-FR",
    long: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    short: [
        "janv", "févr", "mars", "avr", "mai", "juin", "juil", "août", "sept", "oct", "nov",
        "déc",
    ],
};

pub static DE_DE: MonthTable = MonthTable {
    tag: "de-DE",
    long: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    short: [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ],
};

static TABLES: [&MonthTable; 5] = [&PT_BR, &EN_US, &ES_ES, &FR_FR, &DE_DE];

/// Lower-cased full tags plus primary language subtags.
static REGISTRY: Lazy<HashMap<String, &'static MonthTable>> = Lazy::new(|| {
    let mut registry = HashMap::new();
    for table in TABLES {
        let tag = table.tag.to_ascii_lowercase();
        if let Some(language) = primary_subtag(&tag) {
            registry.entry(language.to_string()).or_insert(table);
        }
        registry.insert(tag, table);
    }
    registry
});

fn primary_subtag(tag: &str) -> Option<&str> {
    tag.split(['-', '_']).next().filter(|s| !s.is_empty())
}

/// Finds the month-name table for a BCP 47 tag such as `pt-BR` or `en`.
///
/// Falls back to the primary language subtag, then to the `pt-BR` table.
pub fn month_names_for(tag: &str) -> &'static MonthTable {
    let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
    if let Some(table) = REGISTRY.get(&normalized) {
        return *table;
    }
    if let Some(table) = primary_subtag(&normalized).and_then(|lang| REGISTRY.get(lang)) {
        return *table;
    }
    tracing::warn!(locale = tag, fallback = DEFAULT_LOCALE, "unsupported locale for month names");
    &PT_BR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_exact_language_and_fallback() {
        assert_eq!(month_names_for("en-US").language_tag(), "en-US");
        assert_eq!(month_names_for("EN_gb").language_tag(), "en-US");
        assert_eq!(month_names_for("pt-PT").language_tag(), "pt-BR");
        assert_eq!(month_names_for("fr").language_tag(), "fr-FR");
        assert_eq!(month_names_for("ja-JP").language_tag(), "pt-BR");
        assert_eq!(month_names_for("").language_tag(), "pt-BR");
    }

    #[test]
    fn out_of_range_month_is_empty() {
        assert_eq!(PT_BR.month_name(0, MonthStyle::Long), "");
        assert_eq!(PT_BR.month_name(13, MonthStyle::Short), "");
        assert_eq!(PT_BR.month_name(11, MonthStyle::Long), "novembro");
    }
}
