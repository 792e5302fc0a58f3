//! Canonical symptom chips.
//!
//! The symptom picker offers these labels as one-tap choices next to a
//! free-text entry. Each one is matched by at least one builtin condition.

pub const CANONICAL_SYMPTOMS: [&str; 12] = [
    "Fever",
    "Headache",
    "Cough",
    "Sore Throat",
    "Nausea",
    "Fatigue",
    "Dizziness",
    "Chest Pain",
    "Shortness of Breath",
    "Stomach Pain",
    "Joint Pain",
    "Skin Rash",
];
