//! Part-of-speech features.

use serde::{Deserialize, Serialize};

closed_set! {
    /// Coarse part-of-speech tag.
    pub enum Tag {
        /// Unknown.
        #[default]
        Unknown = 0 => "UNKNOWN",
        /// Adjective.
        Adj = 1 => "ADJ",
        /// Adposition (preposition and postposition).
        Adp = 2 => "ADP",
        /// Adverb.
        Adv = 3 => "ADV",
        /// Conjunction.
        Conj = 4 => "CONJ",
        /// Determiner.
        Det = 5 => "DET",
        /// Noun (common and proper).
        Noun = 6 => "NOUN",
        /// Cardinal number.
        Num = 7 => "NUM",
        /// Pronoun.
        Pron = 8 => "PRON",
        /// Particle or other function word.
        Prt = 9 => "PRT",
        /// Punctuation.
        Punct = 10 => "PUNCT",
        /// Verb (all tenses and modes).
        Verb = 11 => "VERB",
        /// Other: foreign words, typos, abbreviations.
        X = 12 => "X",
        /// Affix.
        Affix = 13 => "AFFIX",
    }
}

closed_set! {
    /// Grammatical aspect.
    pub enum Aspect {
        /// Unknown.
        #[default]
        Unknown = 0 => "ASPECT_UNKNOWN",
        /// Perfective.
        Perfective = 1 => "PERFECTIVE",
        /// Imperfective.
        Imperfective = 2 => "IMPERFECTIVE",
        /// Progressive.
        Progressive = 3 => "PROGRESSIVE",
    }
}

closed_set! {
    /// Grammatical case.
    pub enum Case {
        /// Unknown.
        #[default]
        Unknown = 0 => "CASE_UNKNOWN",
        /// Accusative.
        Accusative = 1 => "ACCUSATIVE",
        /// Adverbial.
        Adverbial = 2 => "ADVERBIAL",
        /// Complementive.
        Complementive = 3 => "COMPLEMENTIVE",
        /// Dative.
        Dative = 4 => "DATIVE",
        /// Genitive.
        Genitive = 5 => "GENITIVE",
        /// Instrumental.
        Instrumental = 6 => "INSTRUMENTAL",
        /// Locative.
        Locative = 7 => "LOCATIVE",
        /// Nominative.
        Nominative = 8 => "NOMINATIVE",
        /// Oblique.
        Oblique = 9 => "OBLIQUE",
        /// Partitive.
        Partitive = 10 => "PARTITIVE",
        /// Prepositional.
        Prepositional = 11 => "PREPOSITIONAL",
        /// Reflexive.
        Reflexive = 12 => "REFLEXIVE_CASE",
        /// Relative.
        Relative = 13 => "RELATIVE_CASE",
        /// Vocative.
        Vocative = 14 => "VOCATIVE",
    }
}

closed_set! {
    /// Morphological form.
    pub enum Form {
        /// Unknown.
        #[default]
        Unknown = 0 => "FORM_UNKNOWN",
        /// Adnomial.
        Adnomial = 1 => "ADNOMIAL",
        /// Auxiliary.
        Auxiliary = 2 => "AUXILIARY",
        /// Complementizer.
        Complementizer = 3 => "COMPLEMENTIZER",
        /// Final ending.
        FinalEnding = 4 => "FINAL_ENDING",
        /// Gerund.
        Gerund = 5 => "GERUND",
        /// Realis.
        Realis = 6 => "REALIS",
        /// Irrealis.
        Irrealis = 7 => "IRREALIS",
        /// Short form.
        Short = 8 => "SHORT",
        /// Long form.
        Long = 9 => "LONG",
        /// Order form.
        Order = 10 => "ORDER",
        /// Specific form.
        Specific = 11 => "SPECIFIC",
    }
}

closed_set! {
    /// Grammatical gender.
    pub enum Gender {
        /// Unknown.
        #[default]
        Unknown = 0 => "GENDER_UNKNOWN",
        /// Feminine.
        Feminine = 1 => "FEMININE",
        /// Masculine.
        Masculine = 2 => "MASCULINE",
        /// Neuter.
        Neuter = 3 => "NEUTER",
    }
}

closed_set! {
    /// Grammatical mood.
    pub enum Mood {
        /// Unknown.
        #[default]
        Unknown = 0 => "MOOD_UNKNOWN",
        /// Conditional.
        Conditional = 1 => "CONDITIONAL_MOOD",
        /// Imperative.
        Imperative = 2 => "IMPERATIVE",
        /// Indicative.
        Indicative = 3 => "INDICATIVE",
        /// Interrogative.
        Interrogative = 4 => "INTERROGATIVE",
        /// Jussive.
        Jussive = 5 => "JUSSIVE",
        /// Subjunctive.
        Subjunctive = 6 => "SUBJUNCTIVE",
    }
}

closed_set! {
    /// Grammatical number.
    pub enum Number {
        /// Unknown.
        #[default]
        Unknown = 0 => "NUMBER_UNKNOWN",
        /// Singular.
        Singular = 1 => "SINGULAR",
        /// Plural.
        Plural = 2 => "PLURAL",
        /// Dual.
        Dual = 3 => "DUAL",
    }
}

closed_set! {
    /// Grammatical person.
    pub enum Person {
        /// Unknown.
        #[default]
        Unknown = 0 => "PERSON_UNKNOWN",
        /// First.
        First = 1 => "FIRST",
        /// Second.
        Second = 2 => "SECOND",
        /// Third.
        Third = 3 => "THIRD",
        /// Reflexive.
        Reflexive = 4 => "REFLEXIVE_PERSON",
    }
}

closed_set! {
    /// Whether the token is part of a proper name.
    pub enum Proper {
        /// Unknown.
        #[default]
        Unknown = 0 => "PROPER_UNKNOWN",
        /// Proper.
        Proper = 1 => "PROPER",
        /// Not proper.
        NotProper = 2 => "NOT_PROPER",
    }
}

closed_set! {
    /// Reciprocal features of a pronoun.
    pub enum Reciprocity {
        /// Unknown.
        #[default]
        Unknown = 0 => "RECIPROCITY_UNKNOWN",
        /// Reciprocal.
        Reciprocal = 1 => "RECIPROCAL",
        /// Non-reciprocal.
        NonReciprocal = 2 => "NON_RECIPROCAL",
    }
}

closed_set! {
    /// Grammatical tense.
    pub enum Tense {
        /// Unknown.
        #[default]
        Unknown = 0 => "TENSE_UNKNOWN",
        /// Conditional.
        Conditional = 1 => "CONDITIONAL_TENSE",
        /// Future.
        Future = 2 => "FUTURE",
        /// Past.
        Past = 3 => "PAST",
        /// Present.
        Present = 4 => "PRESENT",
        /// Imperfect.
        Imperfect = 5 => "IMPERFECT",
        /// Pluperfect.
        Pluperfect = 6 => "PLUPERFECT",
    }
}

closed_set! {
    /// Grammatical voice.
    pub enum Voice {
        /// Unknown.
        #[default]
        Unknown = 0 => "VOICE_UNKNOWN",
        /// Active.
        Active = 1 => "ACTIVE",
        /// Causative.
        Causative = 2 => "CAUSATIVE",
        /// Passive.
        Passive = 3 => "PASSIVE",
    }
}

/// Part-of-speech bundle of a token.
///
/// Features the analyzer did not report stay `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PartOfSpeech {
    /// Coarse tag.
    pub tag: Tag,
    /// Aspect.
    pub aspect: Aspect,
    /// Case.
    pub case: Case,
    /// Form.
    pub form: Form,
    /// Gender.
    pub gender: Gender,
    /// Mood.
    pub mood: Mood,
    /// Number.
    pub number: Number,
    /// Person.
    pub person: Person,
    /// Proper.
    pub proper: Proper,
    /// Reciprocity.
    pub reciprocity: Reciprocity,
    /// Tense.
    pub tense: Tense,
    /// Voice.
    pub voice: Voice,
}

impl PartOfSpeech {
    /// Creates a bundle with only the tag set.
    #[must_use]
    pub fn tagged(tag: Tag) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }
}
