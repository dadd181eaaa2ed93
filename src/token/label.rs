//! Dependency relation labels.
//!
//! The closed label set of the analyzer, with its wire values.

closed_set! {
    /// Syntactic relation between a head token and its dependent.
    pub enum DependencyEdgeLabel {
        /// Unknown relation.
        #[default]
        Unknown = 0 => "UNKNOWN",
        /// Abbreviation modifier.
        Abbrev = 1 => "ABBREV",
        /// Adjectival complement.
        Acomp = 2 => "ACOMP",
        /// Adverbial clause modifier.
        Advcl = 3 => "ADVCL",
        /// Adverbial modifier.
        Advmod = 4 => "ADVMOD",
        /// Adjectival modifier of an NP.
        Amod = 5 => "AMOD",
        /// Appositional modifier of an NP.
        Appos = 6 => "APPOS",
        /// Attribute dependent of a copular verb.
        Attr = 7 => "ATTR",
        /// Auxiliary (non-main) verb.
        Aux = 8 => "AUX",
        /// Passive auxiliary.
        Auxpass = 9 => "AUXPASS",
        /// Coordinating conjunction.
        Cc = 10 => "CC",
        /// Clausal complement of a verb or adjective.
        Ccomp = 11 => "CCOMP",
        /// Conjunct.
        Conj = 12 => "CONJ",
        /// Clausal subject.
        Csubj = 13 => "CSUBJ",
        /// Clausal passive subject.
        Csubjpass = 14 => "CSUBJPASS",
        /// Dependency (unable to determine).
        Dep = 15 => "DEP",
        /// Determiner.
        Det = 16 => "DET",
        /// Discourse.
        Discourse = 17 => "DISCOURSE",
        /// Direct object.
        Dobj = 18 => "DOBJ",
        /// Expletive.
        Expl = 19 => "EXPL",
        /// Goes with (part of a word in a text not well edited).
        Goeswith = 20 => "GOESWITH",
        /// Indirect object.
        Iobj = 21 => "IOBJ",
        /// Marker (word introducing a subordinate clause).
        Mark = 22 => "MARK",
        /// Multi-word expression.
        Mwe = 23 => "MWE",
        /// Multi-word verbal expression.
        Mwv = 24 => "MWV",
        /// Negation modifier.
        Neg = 25 => "NEG",
        /// Noun compound modifier.
        Nn = 26 => "NN",
        /// Noun phrase used as an adverbial modifier.
        Npadvmod = 27 => "NPADVMOD",
        /// Nominal subject.
        Nsubj = 28 => "NSUBJ",
        /// Passive nominal subject.
        Nsubjpass = 29 => "NSUBJPASS",
        /// Numeric modifier of a noun.
        Num = 30 => "NUM",
        /// Element of compound number.
        Number = 31 => "NUMBER",
        /// Punctuation mark.
        P = 32 => "P",
        /// Parataxis relation.
        Parataxis = 33 => "PARATAXIS",
        /// Participial modifier.
        Partmod = 34 => "PARTMOD",
        /// Complement of a preposition is a clause.
        Pcomp = 35 => "PCOMP",
        /// Object of a preposition.
        Pobj = 36 => "POBJ",
        /// Possession modifier.
        Poss = 37 => "POSS",
        /// Postverbal negative particle.
        Postneg = 38 => "POSTNEG",
        /// Predicate complement.
        Precomp = 39 => "PRECOMP",
        /// Preconjunt.
        Preconj = 40 => "PRECONJ",
        /// Predeterminer.
        Predet = 41 => "PREDET",
        /// Prefix.
        Pref = 42 => "PREF",
        /// Prepositional modifier.
        Prep = 43 => "PREP",
        /// Reflexive pronoun.
        Pronl = 44 => "PRONL",
        /// Particle.
        Prt = 45 => "PRT",
        /// Associative or possessive marker.
        Ps = 46 => "PS",
        /// Quantifier phrase modifier.
        Quantmod = 47 => "QUANTMOD",
        /// Relative clause modifier.
        Rcmod = 48 => "RCMOD",
        /// Complementizer in relative clause.
        Rcmodrel = 49 => "RCMODREL",
        /// Ellipsis without a preceding predicate.
        Rdrop = 50 => "RDROP",
        /// Referent.
        Ref = 51 => "REF",
        /// Remnant.
        Remnant = 52 => "REMNANT",
        /// Reparandum.
        Reparandum = 53 => "REPARANDUM",
        /// Root of the sentence.
        Root = 54 => "ROOT",
        /// Suffix specifying a unit of number.
        Snum = 55 => "SNUM",
        /// Suffix.
        Suff = 56 => "SUFF",
        /// Temporal modifier.
        Tmod = 57 => "TMOD",
        /// Topic marker.
        Topic = 58 => "TOPIC",
        /// Clause headed by an infinite form of the verb.
        Vmod = 59 => "VMOD",
        /// Vocative.
        Vocative = 60 => "VOCATIVE",
        /// Open clausal complement.
        Xcomp = 61 => "XCOMP",
        /// Name suffix.
        Suffix = 62 => "SUFFIX",
        /// Name title.
        Title = 63 => "TITLE",
        /// Adverbial phrase modifier.
        Advphmod = 64 => "ADVPHMOD",
        /// Causative auxiliary.
        Auxcaus = 65 => "AUXCAUS",
        /// Helper auxiliary.
        Auxvv = 66 => "AUXVV",
        /// Rentaishi (prenominal modifier).
        Dtmod = 67 => "DTMOD",
        /// Foreign words.
        Foreign = 68 => "FOREIGN",
        /// Keyword.
        Kw = 69 => "KW",
        /// List for chains of comparable items.
        List = 70 => "LIST",
        /// Nominalized clause.
        Nomc = 71 => "NOMC",
        /// Nominalized clausal subject.
        Nomcsubj = 72 => "NOMCSUBJ",
        /// Nominalized clausal passive.
        Nomcsubjpass = 73 => "NOMCSUBJPASS",
        /// Compound of numeric modifier.
        Numc = 74 => "NUMC",
        /// Copula.
        Cop = 75 => "COP",
        /// Dislocated relation (for fronted or topicalized elements).
        Dislocated = 76 => "DISLOCATED",
        /// Aspect marker.
        Asp = 77 => "ASP",
        /// Genitive modifier.
        Gmod = 78 => "GMOD",
        /// Genitive object.
        Gobj = 79 => "GOBJ",
        /// Infinitival modifier.
        Infmod = 80 => "INFMOD",
        /// Measure.
        Mes = 81 => "MES",
        /// Nominal complement of a noun.
        Ncomp = 82 => "NCOMP",
    }
}
