use crate::core::Currency;

/// Renders integer minor-unit amounts with a currency's display rules.
///
/// ```
/// use waehrung::core::resolve;
///
/// let gbp = resolve("GBP").formatter();
/// assert_eq!(gbp.format(123456), "£1,234.56");
/// assert_eq!(gbp.format(-5), "-£0.05");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    /// Number of minor-unit digits.
    pub fraction: u32,
    /// Decimal separator.
    pub decimal: String,
    /// Thousands separator; empty disables grouping.
    pub thousand: String,
    /// Currency symbol placed at the template's `$`.
    pub grapheme: String,
    /// Placement template, `1` for the amount and `$` for the grapheme.
    pub template: String,
}

impl Formatter {
    /// Format `amount` minor units.
    ///
    /// The number replaces the first `1` of the template and the grapheme the
    /// first `$`. A template without `1` gets the number appended. Negative
    /// amounts are prefixed with `-`.
    pub fn format(&self, amount: i64) -> String {
        let number = self.number(amount.unsigned_abs());

        let mut out = String::with_capacity(self.template.len() + number.len() + 8);
        if amount < 0 {
            out.push('-');
        }
        let mut amount_placed = false;
        let mut grapheme_placed = false;
        for c in self.template.chars() {
            match c {
                '1' if !amount_placed => {
                    out.push_str(&number);
                    amount_placed = true;
                }
                '$' if !grapheme_placed => {
                    out.push_str(&self.grapheme);
                    grapheme_placed = true;
                }
                c => out.push(c),
            }
        }
        if !amount_placed {
            out.push_str(&number);
        }
        out
    }

    fn number(&self, magnitude: u64) -> String {
        let fraction = self.fraction as usize;
        let mut digits = magnitude.to_string();
        if digits.len() <= fraction {
            digits.insert_str(0, &"0".repeat(fraction + 1 - digits.len()));
        }
        let (int_part, frac_part) = digits.split_at(digits.len() - fraction);

        let mut number = group(int_part, &self.thousand);
        if fraction > 0 {
            number.push_str(&self.decimal);
            number.push_str(frac_part);
        }
        number
    }
}

/// Insert `thousand` between groups of three digits, counting from the right.
fn group(digits: &str, thousand: &str) -> String {
    if thousand.is_empty() {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * thousand.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(thousand);
        }
        out.push(c);
    }
    out
}

impl Currency {
    /// Formatter carrying this currency's display rules.
    pub fn formatter(&self) -> Formatter {
        Formatter {
            fraction: self.fraction(),
            decimal: self.decimal().to_string(),
            thousand: self.thousand().to_string(),
            grapheme: self.grapheme().to_string(),
            template: self.template().to_string(),
        }
    }
}
