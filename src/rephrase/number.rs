//! Numeral and unit variants of numeric entities (`2777.0 (metres)`).
use crate::error::Error;

/// Surface forms of a unit: an optional abbreviation (glued or not to the number)
/// and the words it can be spelled with.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct UnitForms<'a> {
    pub abbreviation: Option<&'static str>,
    pub words: Vec<&'a str>,
}

impl<'a> UnitForms<'a> {
    /// Look the unit up.
    ///
    /// Errors on units that are not known: this means that the lookup is incomplete
    /// and that the corpus holds phrasings we can not generate.
    pub fn lookup(unit: &'a str) -> Result<Self, Error> {
        let (abbreviation, words): (Option<&'static str>, Vec<&'a str>) = match unit {
            "metres" => (Some("m"), vec![unit, "meters"]),
            "millimetres" => (Some("mm"), vec![unit]),
            "centimetres" => (Some("cm"), vec![unit]),
            "kilometres" => (Some("km"), vec![unit]),
            "kilograms" => (Some("kg"), vec![unit]),
            "litres" => (Some("l"), vec![unit]),
            "inches" => (Some("''"), vec![unit]),
            "degreecelsius" | "degreeklsius" => (None, vec!["degrees celsius"]),
            "grampercubiccentimetres" => (None, vec!["grams per cubic centimetre"]),
            "kilometreperseconds" => (
                None,
                vec![
                    "kilometres per second",
                    "km/s",
                    "km/sec",
                    "km per second",
                    "km per sec",
                ],
            ),
            "squarekilometres" | "square kilometres" => {
                (None, vec!["square kilometres", "sq km"])
            }
            "cubiccentimetres" => (Some("cc"), vec!["cubic centimetres"]),
            "cubic inches"
            | "days"
            | "tonnes"
            | "square metres"
            | "inhabitants per square kilometre"
            | "kelvins" => (None, vec![unit]),
            _ => return Err(Error::UnknownUnit(unit.to_string())),
        };

        Ok(Self {
            abbreviation,
            words,
        })
    }
}

/// Ways of writing `number`: `2777.0`, `2,777.0`, and if it is integral, `2777`, `2,777`.
pub(super) fn numerals(number: f64) -> Vec<String> {
    let repr = float_repr(number);
    let grouped = group_thousands(&repr);
    let mut numerals = vec![repr, grouped];

    if number.fract() == 0.0 {
        let integer = if number.abs() < 1e38 {
            (number as i128).to_string()
        } else {
            format!("{:.0}", number)
        };
        numerals.push(integer.clone());
        numerals.push(group_thousands(&integer));
    }

    numerals
}

/// Shortest round-tripping representation of a float, always with a fractional part
/// or an exponent (`2777.0`, `0.5`, `1e+16`, `1.5e-05`).
pub(super) fn float_repr(x: f64) -> String {
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let abs = x.abs();
    if (1e-4..1e16).contains(&abs) {
        let repr = x.to_string();
        if repr.contains('.') {
            repr
        } else {
            repr + ".0"
        }
    } else {
        let repr = format!("{:e}", x);
        match repr.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or_default();
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            None => repr,
        }
    }
}

/// Insert `,` thousands separators in the integral part of a numeral.
pub(super) fn group_thousands(numeral: &str) -> String {
    let (sign, unsigned) = match numeral.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", numeral),
    };
    let int_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let (integral, rest) = unsigned.split_at(int_end);

    let mut grouped = String::with_capacity(integral.len() + integral.len() / 3);
    for (idx, digit) in integral.chars().enumerate() {
        if idx > 0 && (integral.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}{}", sign, grouped, rest)
}
