// Multi-word technical terms that must survive tokenization.
//
// Normalization lowercases and splits on whitespace, which would tear
// "quantum dot" into two generic tokens. Protection rewrites known
// compounds with underscores before tokenization; restoration puts the
// spaces back afterwards so downstream n-grams see the original phrase.

/// Domain compounds preserved through normalization.
pub const PRESERVE_COMPOUNDS: &[&str] = &[
    "quantum dot",
    "quantum well",
    "quantum computing",
    "quantum state",
    "quantum information",
    "quantum transport",
    "quantum memory",
    "band gap",
    "band structure",
    "band alignment",
    "spin qubit",
    "spin transport",
    "spin current",
    "spin valve",
    "spin polarization",
    "laser diode",
    "laser emission",
    "laser cavity",
    "topological insulator",
    "topological state",
    "topological phase",
    "field effect",
    "carrier transport",
    "electron transport",
    "josephson junction",
    "molecular beam",
];

/// Lowercase the text and rewrite every known compound with underscores.
/// Compounds are applied longest-first so a longer phrase is never
/// shadowed by a shorter one sharing a prefix.
pub fn protect_compounds(text: &str) -> String {
    let mut protected = text.to_lowercase();
    for compound in by_length_desc() {
        if protected.contains(compound) {
            protected = protected.replace(compound, &compound.replace(' ', "_"));
        }
    }
    protected
}

/// Reverse of [`protect_compounds`]: turn underscore forms of known
/// compounds back into their spaced originals. Unknown underscore
/// tokens are left alone.
pub fn restore_compounds(text: &str) -> String {
    let mut restored = text.to_string();
    for compound in by_length_desc() {
        let underscored = compound.replace(' ', "_");
        if restored.contains(&underscored) {
            restored = restored.replace(&underscored, compound);
        }
    }
    restored
}

fn by_length_desc() -> Vec<&'static str> {
    let mut compounds = PRESERVE_COMPOUNDS.to_vec();
    compounds.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    compounds
}

// ==== Tests ====
