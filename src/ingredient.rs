//! Free-text ingredient parsing.
//!
//! Recipe APIs ship ingredients as plain strings ("1 1/2 cups flour",
//! "a pinch of salt"). [`parse`] turns one line into a structured
//! [`Ingredient`] on a best-effort basis: it never fails, it degrades.

use crate::model::Ingredient;

/// Unit spellings mapped to their canonical long form. Unknown tokens are
/// left untouched and end up in the ingredient name.
const UNIT_SYNONYMS: &[(&str, &str)] = &[
    ("tablespoons", "tablespoon"),
    ("tbsp", "tablespoon"),
    ("tbs", "tablespoon"),
    ("teaspoons", "teaspoon"),
    ("tsp", "teaspoon"),
    ("ounces", "ounce"),
    ("oz", "ounce"),
    ("pounds", "pound"),
    ("lbs", "pound"),
    ("lb", "pound"),
    ("cups", "cup"),
    ("grams", "gram"),
    ("g", "gram"),
    ("kilograms", "kilogram"),
    ("kgs", "kilogram"),
    ("kg", "kilogram"),
    ("milliliters", "milliliter"),
    ("ml", "milliliter"),
    ("liters", "liter"),
    ("l", "liter"),
    ("pinches", "pinch"),
    ("cloves", "clove"),
    ("slices", "slice"),
];

const CANONICAL_UNITS: &[&str] = &[
    "tablespoon",
    "teaspoon",
    "ounce",
    "pound",
    "cup",
    "gram",
    "kilogram",
    "milliliter",
    "liter",
    "pinch",
    "clove",
    "slice",
];

/// Parse one raw ingredient line.
///
/// Malformed input never errors; the fallback is
/// `{count: None, unit: "", ingredient: <original text, trimmed>}`.
pub fn parse(raw: &str) -> Ingredient {
    let original = raw.trim();
    let cleaned = strip_parentheticals(original);
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    if tokens.is_empty() {
        return fallback(original);
    }

    // The unit may sit after a quantity ("2 tbsp oil") or after filler
    // words ("a pinch of salt"), so scan the whole line for the first
    // token that names a unit.
    let unit_index = tokens.iter().position(|t| canonical_unit(t).is_some());

    match unit_index {
        Some(i) => {
            // canonical_unit(tokens[i]) is Some by construction
            let unit = canonical_unit(tokens[i]).unwrap_or_default().to_string();
            let count = parse_quantity(&tokens[..i]);
            let ingredient = join_name(&tokens[i + 1..]);
            Ingredient {
                count,
                unit,
                ingredient,
            }
        }
        None => {
            // No unit: take a leading numeric quantity if there is one
            // ("3 eggs"), otherwise keep the whole line as the name.
            let consumed = leading_quantity_len(&tokens);
            if consumed == 0 {
                return fallback(original);
            }
            let count = parse_quantity(&tokens[..consumed]);
            Ingredient {
                count,
                unit: String::new(),
                ingredient: join_name(&tokens[consumed..]),
            }
        }
    }
}

fn fallback(original: &str) -> Ingredient {
    Ingredient {
        count: None,
        unit: String::new(),
        ingredient: original.to_string(),
    }
}

/// Remove parenthetical notes such as "(about 200g)".
fn strip_parentheticals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

fn canonical_unit(token: &str) -> Option<&'static str> {
    let t = token
        .trim_matches(|c: char| c == ',' || c == '.' || c == ';')
        .to_lowercase();
    if let Some(&u) = CANONICAL_UNITS.iter().find(|&&u| u == t) {
        return Some(u);
    }
    UNIT_SYNONYMS
        .iter()
        .find(|(syn, _)| *syn == t)
        .map(|&(_, canon)| canon)
}

/// Sum the numeric value of a run of quantity tokens ("1 1/2" -> 1.5).
/// Any unparseable token poisons the whole quantity (`None`) rather than
/// guessing.
fn parse_quantity(tokens: &[&str]) -> Option<f64> {
    if tokens.is_empty() {
        return None;
    }
    let mut total = 0.0;
    for tok in tokens {
        total += token_value(tok)?;
    }
    Some(total)
}

/// How many leading tokens form a numeric quantity.
fn leading_quantity_len(tokens: &[&str]) -> usize {
    tokens
        .iter()
        .take_while(|t| token_value(t).is_some())
        .count()
}

/// Numeric value of a single token: integer, decimal, "a/b" fraction,
/// hyphenated mixed number ("1-1/2") or unicode vulgar fraction,
/// including the attached form "1½".
fn token_value(token: &str) -> Option<f64> {
    let tok = token.trim_matches(|c: char| c == ',' || c == ';');
    if tok.is_empty() {
        return None;
    }

    // "1-1/2" means one and a half
    if let Some((whole, frac)) = tok.split_once('-') {
        if !whole.is_empty() && !frac.is_empty() {
            return Some(token_value(whole)? + token_value(frac)?);
        }
    }

    if let Some((num, den)) = tok.split_once('/') {
        let num: f64 = num.parse().ok()?;
        let den: f64 = den.parse().ok()?;
        if den == 0.0 {
            return None;
        }
        return Some(num / den);
    }

    // "1½": digits followed by a single vulgar-fraction char
    if let Some(last) = tok.chars().last() {
        if let Some(frac) = vulgar_fraction(last) {
            let head: String = tok.chars().take(tok.chars().count() - 1).collect();
            if head.is_empty() {
                return Some(frac);
            }
            let whole: f64 = head.parse().ok()?;
            return Some(whole + frac);
        }
    }

    tok.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

fn vulgar_fraction(c: char) -> Option<f64> {
    Some(match c {
        '¼' => 0.25,
        '½' => 0.5,
        '¾' => 0.75,
        '⅓' => 1.0 / 3.0,
        '⅔' => 2.0 / 3.0,
        '⅕' => 0.2,
        '⅖' => 0.4,
        '⅗' => 0.6,
        '⅘' => 0.8,
        '⅙' => 1.0 / 6.0,
        '⅚' => 5.0 / 6.0,
        '⅛' => 0.125,
        '⅜' => 0.375,
        '⅝' => 0.625,
        '⅞' => 0.875,
        _ => return None,
    })
}

/// Join the remaining tokens into the ingredient name, dropping the
/// filler "of" that often follows a unit ("cup of sugar").
fn join_name(tokens: &[&str]) -> String {
    let rest = match tokens.first() {
        Some(t) if t.eq_ignore_ascii_case("of") => &tokens[1..],
        _ => tokens,
    };
    rest.join(" ")
}
