//! Content store: the shipped keyword/definition table.
//!
//! AQA GCSE Biology, topic 4.1 (cell biology).

use crate::types::KeywordEntry;

/// The shipped content set.
pub const CELL_BIOLOGY: &[KeywordEntry] = &[
    KeywordEntry::new(
        "Active transport",
        "Movement of particles from an area of lower concentration to an area of higher concentration using energy from respiration.",
    ),
    KeywordEntry::new(
        "Cell",
        "The basic structural and functional unit of all known organisms.",
    ),
    KeywordEntry::new("Cell membrane", "Controls what enters and leaves the cell."),
    KeywordEntry::new(
        "Cell wall",
        "A rigid outer layer in plant and algal cells, providing support and protection.",
    ),
    KeywordEntry::new(
        "Chloroplast",
        "Organelle in plant and algal cells where photosynthesis takes place.",
    ),
    KeywordEntry::new(
        "Chromosome",
        "Thread-like structure made of DNA, found in the nucleus, carrying genetic information.",
    ),
    KeywordEntry::new(
        "Concentration gradient",
        "The difference in concentration between two areas.",
    ),
    KeywordEntry::new(
        "Cytoplasm",
        "Jelly-like substance filling the cell, where most chemical reactions occur.",
    ),
    KeywordEntry::new(
        "Differentiated cell",
        "A cell that has specialised to perform a specific function.",
    ),
    KeywordEntry::new(
        "Diffusion",
        "Net movement of particles from an area of higher concentration to an area of lower concentration.",
    ),
    KeywordEntry::new(
        "DNA",
        "Deoxyribonucleic acid, the genetic material found in all living organisms.",
    ),
    KeywordEntry::new(
        "Eukaryotic cell",
        "A cell that has a nucleus and other membrane-bound organelles.",
    ),
    KeywordEntry::new(
        "Magnification",
        "How many times larger an image appears compared to the actual size of the object.",
    ),
    KeywordEntry::new(
        "Meristem",
        "Regions of undifferentiated cells in plants where growth occurs.",
    ),
    KeywordEntry::new(
        "Mitochondria",
        "Organelles where aerobic respiration takes place, releasing energy.",
    ),
    KeywordEntry::new(
        "Mitosis",
        "A type of cell division that produces two genetically identical diploid daughter cells.",
    ),
    KeywordEntry::new(
        "Nucleus",
        "Contains the cell's genetic material and controls cell activities.",
    ),
    KeywordEntry::new(
        "Osmosis",
        "The net movement of water molecules across a partially permeable membrane from an area of higher water potential to an area of lower water potential.",
    ),
    KeywordEntry::new(
        "Photosynthesis",
        "The process by which plants and other organisms use sunlight to synthesize foods from carbon dioxide and water.",
    ),
    KeywordEntry::new(
        "Prokaryotic cell",
        "A cell that lacks a nucleus and other membrane-bound organelles (e.g., bacteria).",
    ),
    KeywordEntry::new("Ribosome", "Organelles responsible for protein synthesis."),
    KeywordEntry::new(
        "Stem cell",
        "An undifferentiated cell that can differentiate into various specialised cell types.",
    ),
    KeywordEntry::new(
        "Vacuole",
        "A membrane-bound sac within the cytoplasm of a cell, involved in storage and maintaining turgor pressure in plant cells.",
    ),
];
