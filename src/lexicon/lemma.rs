// Noun lemmatizer: plural nouns reduced to their singular base form.
//
// An irregular-form table is consulted first, then a small set of suffix
// rules in the style of WordNet's morphological detachment. A rule's output
// goes back through the irregular table ("womens" -> "women" -> "woman"),
// so every lemma is a fixed point and normalization stays idempotent.

/// Irregular plurals and forms the suffix rules would mangle.
const IRREGULAR: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "people"),
    ("mice", "mouse"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("thieves", "thief"),
    ("wolves", "wolf"),
    ("shelves", "shelf"),
    ("loaves", "loaf"),
    ("crises", "crisis"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("bases", "basis"),
    ("diagnoses", "diagnosis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("data", "datum"),
    ("media", "medium"),
    ("series", "series"),
    ("species", "species"),
    ("news", "news"),
    ("economics", "economics"),
    ("politics", "politics"),
    ("physics", "physics"),
    ("mathematics", "mathematics"),
    ("ethics", "ethics"),
    ("statistics", "statistics"),
    ("americas", "america"),
    ("states", "state"),
    ("taxes", "tax"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("appendices", "appendix"),
    ("alumni", "alumnus"),
    ("stimuli", "stimulus"),
    ("radii", "radius"),
    ("bias", "bias"),
    ("atlas", "atlas"),
    ("canvas", "canvas"),
    ("alias", "alias"),
    ("texas", "texas"),
    ("kansas", "kansas"),
    ("arkansas", "arkansas"),
    ("headaches", "headache"),
];

/// Endings that look plural but are not ("class", "virus", "crisis", "chaos").
const SINGULAR_S_ENDINGS: &[&str] = &["ss", "us", "is", "os"];

/// Shortest word the suffix rules will touch.
const MIN_RULE_LEN: usize = 4;

/// Reduce a lowercased, purely alphabetic noun to its base form.
pub fn lemmatize_noun(word: &str) -> String {
    if let Some(lemma) = irregular(word) {
        return lemma.to_string();
    }
    let stem = apply_suffix_rules(word);
    match irregular(&stem) {
        Some(lemma) => lemma.to_string(),
        None => stem,
    }
}

fn irregular(word: &str) -> Option<&'static str> {
    IRREGULAR
        .iter()
        .find(|(form, _)| *form == word)
        .map(|(_, lemma)| *lemma)
}

fn apply_suffix_rules(word: &str) -> String {
    if word.chars().count() < MIN_RULE_LEN || !word.ends_with('s') {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.chars().count() >= 2 {
            return format!("{stem}y");
        }
    }

    for (suffix, replacement) in [
        ("sses", "ss"),
        ("shes", "sh"),
        ("ches", "ch"),
        ("xes", "x"),
        ("zzes", "zz"),
    ] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }

    if SINGULAR_S_ENDINGS.iter().any(|ending| word.ends_with(ending)) {
        return word.to_string();
    }

    word[..word.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_plurals() {
        assert_eq!(lemmatize_noun("nations"), "nation");
        assert_eq!(lemmatize_noun("policies"), "policy");
        assert_eq!(lemmatize_noun("churches"), "church");
        assert_eq!(lemmatize_noun("boxes"), "box");
        assert_eq!(lemmatize_noun("classes"), "class");
        assert_eq!(lemmatize_noun("ideas"), "idea");
        assert_eq!(lemmatize_noun("days"), "day");
    }

    #[test]
    fn irregular_forms() {
        assert_eq!(lemmatize_noun("women"), "woman");
        assert_eq!(lemmatize_noun("womens"), "woman");
        assert_eq!(lemmatize_noun("childrens"), "child");
        assert_eq!(lemmatize_noun("datas"), "datum");
        assert_eq!(lemmatize_noun("children"), "child");
        assert_eq!(lemmatize_noun("crises"), "crisis");
    }

    #[test]
    fn singular_s_words_untouched() {
        for word in ["congress", "virus", "crisis", "gas", "bus", "chaos", "progress", "texas"] {
            assert_eq!(lemmatize_noun(word), word);
        }
    }

    #[test]
    fn lemmas_are_fixed_points() {
        let words = [
            "nations", "policies", "churches", "boxes", "classes", "women", "crises",
            "americans", "ties", "buses", "taxes", "veterans", "families", "economies",
            "jobs", "schools", "wars", "states", "series", "data", "ideas", "womens",
            "childrens", "mens", "datas", "medias", "peoples", "criterias",
        ];
        for word in words {
            let once = lemmatize_noun(word);
            let twice = lemmatize_noun(&once);
            assert_eq!(once, twice, "lemma of {word:?} is not stable");
        }
    }
}
