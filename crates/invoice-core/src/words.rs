//! # Amount in Words
//!
//! Spells a whole-rupee amount on the Indian scale.
//!
//! ## Scale
//! ```text
//!   1,23,45,678
//!   │  │  │  └── "six hundred and seventy-eight"   (< 1000)
//!   │  │  └───── "forty-five thousand"             (< 1,00,000)
//!   │  └──────── "twenty-three lakh"               (< 1,00,00,000)
//!   └─────────── "one crore"                       (everything above)
//!
//!   → "One crore twenty-three lakh forty-five thousand six hundred and
//!      seventy-eight ONLY"
//! ```
//!
//! Each tier divides with floor division and hands the remainder to the
//! tier below, so no magnitude is spelled twice. The crore tier recurses
//! on its own quotient, so 10^14 comes out as "one crore crore".

const UNITS: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const THOUSAND: u64 = 1_000;
const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

/// Spells `amount` followed by `" ONLY"`.
///
/// ## Example
/// ```rust
/// use invoice_core::words::amount_in_words;
///
/// assert_eq!(amount_in_words(0), "ZERO ONLY");
/// assert_eq!(amount_in_words(1234), "One thousand two hundred and thirty-four ONLY");
/// assert_eq!(amount_in_words(100000), "One lakh ONLY");
/// ```
pub fn amount_in_words(amount: u64) -> String {
    if amount == 0 {
        return "ZERO ONLY".to_string();
    }

    let mut words = Vec::new();
    spell(amount, &mut words);

    let phrase = words.join(" ");
    let mut chars = phrase.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{} ONLY", capitalized.trim())
}

/// Words for a signed grand total. Negative totals spell as zero and
/// report `true` so the caller can flag the clamp.
pub fn grand_total_in_words(grand_total: i64) -> (String, bool) {
    if grand_total < 0 {
        (amount_in_words(0), true)
    } else {
        (amount_in_words(grand_total as u64), false)
    }
}

fn spell(n: u64, out: &mut Vec<String>) {
    match n {
        0 => {}
        1..=19 => out.push(UNITS[n as usize].to_string()),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => out.push(tens.to_string()),
                unit => out.push(format!("{}-{}", tens, UNITS[unit as usize])),
            }
        }
        100..=999 => {
            out.push(UNITS[(n / 100) as usize].to_string());
            out.push("hundred".to_string());
            if n % 100 != 0 {
                out.push("and".to_string());
                spell(n % 100, out);
            }
        }
        _ => {
            let (divisor, scale) = if n < LAKH {
                (THOUSAND, "thousand")
            } else if n < CRORE {
                (LAKH, "lakh")
            } else {
                (CRORE, "crore")
            };
            spell(n / divisor, out);
            out.push(scale.to_string());
            spell(n % divisor, out);
        }
    }
}
