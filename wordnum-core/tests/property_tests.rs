//! Property-based checks over generated Russian numbers and text

use proptest::prelude::*;
use wordnum_core::{decode, substitute, Config};

const UNITS: [&str; 10] = [
    "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];
const TEENS: [&str; 10] = [
    "десять",
    "одиннадцать",
    "двенадцать",
    "тринадцать",
    "четырнадцать",
    "пятнадцать",
    "шестнадцать",
    "семнадцать",
    "восемнадцать",
    "девятнадцать",
];
const TENS: [&str; 10] = [
    "",
    "",
    "двадцать",
    "тридцать",
    "сорок",
    "пятьдесят",
    "шестьдесят",
    "семьдесят",
    "восемьдесят",
    "девяносто",
];
const HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двести",
    "триста",
    "четыреста",
    "пятьсот",
    "шестьсот",
    "семьсот",
    "восемьсот",
    "девятьсот",
];
const SCALES: [&str; 4] = ["миллиардов", "миллионов", "тысяч", ""];

fn spell_group(n: u64, words: &mut Vec<&'static str>) {
    let (h, rest) = ((n / 100) as usize, n % 100);
    words.push(HUNDREDS[h]);
    match rest {
        10..=19 => words.push(TEENS[(rest - 10) as usize]),
        _ => {
            words.push(TENS[(rest / 10) as usize]);
            words.push(UNITS[(rest % 10) as usize]);
        }
    }
}

/// Spell `n` (1..10^12) in Russian words
fn spell(n: u64) -> String {
    let mut words = Vec::new();
    let mut divisor = 1_000_000_000;
    for scale in SCALES {
        let group = (n / divisor) % 1000;
        if group > 0 {
            spell_group(group, &mut words);
            words.push(scale);
        }
        divisor /= 1000;
    }
    words
        .into_iter()
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn russian_text() -> impl Strategy<Value = String> {
    let vocabulary = prop::sample::select(vec![
        "ноль", "один", "два", "пять", "двадцать", "сто", "двести", "тысяча", "миллион",
        "минус", "плюс", "точка", "целых", "и", "первый", "пятый", "коров", "дом", ",", ".",
        "!", "в",
    ]);
    prop::collection::vec(vocabulary, 0..24).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn prop_spelled_numbers_decode(n in 1u64..1_000_000_000_000) {
        let text = spell(n);
        let number = decode(&text, "ru").unwrap();
        prop_assert_eq!(number.value(), n, "'{}'", text);
    }

    #[test]
    fn prop_spelled_numbers_substitute(n in 1u64..1_000_000_000_000) {
        let text = format!("Итого {} рублей.", spell(n));
        let result = substitute(&text, "ru", &Config::default()).unwrap();
        prop_assert_eq!(result, format!("Итого {n} рублей."));
    }

    #[test]
    fn prop_text_without_number_words_is_unchanged(text in "[a-zA-Z0-9 ,.!?\\n-]{0,80}") {
        let result = substitute(&text, "ru", &Config::default()).unwrap();
        prop_assert_eq!(result, text);
    }

    #[test]
    fn prop_substitute_is_idempotent(text in russian_text()) {
        let config = Config::default();
        let once = substitute(&text, "ru", &config).unwrap();
        let twice = substitute(&once, "ru", &config).unwrap();
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn test_spell_helper() {
    assert_eq!(spell(1), "один");
    assert_eq!(spell(115), "сто пятнадцать");
    assert_eq!(
        spell(53_000_243_724),
        "пятьдесят три миллиардов двести сорок три тысяч семьсот двадцать четыре"
    );
}
