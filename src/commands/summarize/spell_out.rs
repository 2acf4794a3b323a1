use super::normalize::parse_amount_cents;

pub const UNRECOGNIZED_AMOUNT: &str = "valor não identificado";

const UNITS: [&str; 20] = [
    "zero",
    "um",
    "dois",
    "três",
    "quatro",
    "cinco",
    "seis",
    "sete",
    "oito",
    "nove",
    "dez",
    "onze",
    "doze",
    "treze",
    "catorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

const TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

// Short scale from 10^6 upwards, (singular, plural).
const SCALES: [(&str, &str); 5] = [
    ("milhão", "milhões"),
    ("bilhão", "bilhões"),
    ("trilhão", "trilhões"),
    ("quatrilhão", "quatrilhões"),
    ("quintilhão", "quintilhões"),
];

/// Spells an amount written in Brazilian notation (`1.234,56`). Text that is
/// not a non-negative decimal yields [`UNRECOGNIZED_AMOUNT`].
pub fn spell_out(amount_text: &str) -> String {
    parse_amount_cents(amount_text)
        .and_then(|cents| u64::try_from(cents).ok())
        .map(spell_out_cents)
        .unwrap_or_else(|| UNRECOGNIZED_AMOUNT.to_string())
}

pub fn spell_out_cents(cents: u64) -> String {
    let reais = cents / 100;
    let centavos = cents % 100;

    let whole = if reais == 1 {
        "um real".to_string()
    } else if reais >= 1_000_000 && reais % 1_000_000 == 0 {
        format!("{} de reais", cardinal(reais))
    } else {
        format!("{} reais", cardinal(reais))
    };

    match centavos {
        0 => whole,
        1 => format!("{whole} e um centavo"),
        _ => format!("{whole} e {} centavos", cardinal(centavos)),
    }
}

pub fn cardinal(value: u64) -> String {
    if value == 0 {
        return UNITS[0].to_string();
    }

    let mut groups = Vec::new();
    let mut remaining = value;
    let mut scale = 0usize;
    while remaining > 0 {
        let group = (remaining % 1000) as usize;
        if group > 0 {
            groups.push((scale, group));
        }
        remaining /= 1000;
        scale += 1;
    }
    groups.reverse();

    let last = groups.len() - 1;
    let mut words = String::new();
    for (index, (scale, group)) in groups.into_iter().enumerate() {
        if index > 0 {
            if index == last && (group < 100 || group % 100 == 0) {
                words.push_str(" e ");
            } else {
                words.push_str(", ");
            }
        }
        words.push_str(&scaled_group(scale, group));
    }

    words
}

fn scaled_group(scale: usize, group: usize) -> String {
    match scale {
        0 => hundreds(group),
        1 if group == 1 => "mil".to_string(),
        1 => format!("{} mil", hundreds(group)),
        _ => {
            let (singular, plural) = SCALES[scale - 2];
            if group == 1 {
                format!("um {singular}")
            } else {
                format!("{} {plural}", hundreds(group))
            }
        }
    }
}

fn hundreds(value: usize) -> String {
    if value == 100 {
        return "cem".to_string();
    }

    let rest = value % 100;
    match (value / 100, rest) {
        (0, _) => below_hundred(rest),
        (hundred, 0) => HUNDREDS[hundred].to_string(),
        (hundred, _) => format!("{} e {}", HUNDREDS[hundred], below_hundred(rest)),
    }
}

fn below_hundred(value: usize) -> String {
    if value < 20 {
        return UNITS[value].to_string();
    }

    match value % 10 {
        0 => TENS[value / 10].to_string(),
        unit => format!("{} e {}", TENS[value / 10], UNITS[unit]),
    }
}
