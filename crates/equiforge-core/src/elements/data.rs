//! The atomic weight reference tables.
//!
//! These tables are the single source of truth for elemental masses in the
//! workspace. Species construction, formula-matrix assembly and
//! mass-conservation checks all resolve through them, so independently
//! initialized parts of the engine can never disagree on an element's mass.

/// One entry of the atomic weight table.
///
/// Weights are standard atomic weights in g/mol and positive for every
/// physically realized element. Isotope and pseudo-element entries
/// ([`ISOTOPE_TABLE`]) share the atomic number of their parent element;
/// the free electron carries atomic number 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementData {
    /// Element symbol, at most 3 ASCII characters, unique across both tables.
    pub symbol: &'static str,
    /// Lower-case English element name.
    pub name: &'static str,
    /// Atomic number Z (0 for the free electron).
    pub atomic_number: u32,
    /// Standard atomic weight in g/mol.
    pub weight: f64,
}

const fn entry(symbol: &'static str, name: &'static str, atomic_number: u32, weight: f64) -> ElementData {
    ElementData { symbol, name, atomic_number, weight }
}

/// The periodic-table entries, ordered by atomic number.
pub static ELEMENT_TABLE: &[ElementData] = &[
    entry("H", "hydrogen", 1, 1.00794),
    entry("He", "helium", 2, 4.002602),
    entry("Li", "lithium", 3, 6.941),
    entry("Be", "beryllium", 4, 9.012182),
    entry("B", "boron", 5, 10.811),
    entry("C", "carbon", 6, 12.011),
    entry("N", "nitrogen", 7, 14.00674),
    entry("O", "oxygen", 8, 15.9994),
    entry("F", "fluorine", 9, 18.9984032),
    entry("Ne", "neon", 10, 20.1797),
    entry("Na", "sodium", 11, 22.98977),
    entry("Mg", "magnesium", 12, 24.3050),
    entry("Al", "aluminum", 13, 26.98154),
    entry("Si", "silicon", 14, 28.0855),
    entry("P", "phosphorus", 15, 30.97376),
    entry("S", "sulfur", 16, 32.066),
    entry("Cl", "chlorine", 17, 35.4527),
    entry("Ar", "argon", 18, 39.948),
    entry("K", "potassium", 19, 39.0983),
    entry("Ca", "calcium", 20, 40.078),
    entry("Sc", "scandium", 21, 44.95591),
    entry("Ti", "titanium", 22, 47.88),
    entry("V", "vanadium", 23, 50.9415),
    entry("Cr", "chromium", 24, 51.9961),
    entry("Mn", "manganese", 25, 54.9381),
    entry("Fe", "iron", 26, 55.847),
    entry("Co", "cobalt", 27, 58.9332),
    entry("Ni", "nickel", 28, 58.69),
    entry("Cu", "copper", 29, 63.546),
    entry("Zn", "zinc", 30, 65.39),
    entry("Ga", "gallium", 31, 69.723),
    entry("Ge", "germanium", 32, 72.61),
    entry("As", "arsenic", 33, 74.92159),
    entry("Se", "selenium", 34, 78.96),
    entry("Br", "bromine", 35, 79.904),
    entry("Kr", "krypton", 36, 83.80),
    entry("Rb", "rubidium", 37, 85.4678),
    entry("Sr", "strontium", 38, 87.62),
    entry("Y", "yttrium", 39, 88.90585),
    entry("Zr", "zirconium", 40, 91.224),
    entry("Nb", "niobium", 41, 92.90638),
    entry("Mo", "molybdenum", 42, 95.94),
    entry("Tc", "technetium", 43, 97.9072),
    entry("Ru", "ruthenium", 44, 101.07),
    entry("Rh", "rhodium", 45, 102.9055),
    entry("Pd", "palladium", 46, 106.42),
    entry("Ag", "silver", 47, 107.8682),
    entry("Cd", "cadmium", 48, 112.411),
    entry("In", "indium", 49, 114.82),
    entry("Sn", "tin", 50, 118.710),
    entry("Sb", "antimony", 51, 121.757),
    entry("Te", "tellurium", 52, 127.60),
    entry("I", "iodine", 53, 126.90447),
    entry("Xe", "xenon", 54, 131.29),
    entry("Cs", "cesium", 55, 132.90543),
    entry("Ba", "barium", 56, 137.327),
    entry("La", "lanthanum", 57, 138.9055),
    entry("Ce", "cerium", 58, 140.115),
    entry("Pr", "praseodymium", 59, 140.90765),
    entry("Nd", "neodymium", 60, 144.24),
    entry("Pm", "promethium", 61, 144.9127),
    entry("Sm", "samarium", 62, 150.36),
    entry("Eu", "europium", 63, 151.965),
    entry("Gd", "gadolinium", 64, 157.25),
    entry("Tb", "terbium", 65, 158.92534),
    entry("Dy", "dysprosium", 66, 162.50),
    entry("Ho", "holmium", 67, 164.93032),
    entry("Er", "erbium", 68, 167.26),
    entry("Tm", "thulium", 69, 168.93421),
    entry("Yb", "ytterbium", 70, 173.04),
    entry("Lu", "lutetium", 71, 174.967),
    entry("Hf", "hafnium", 72, 178.49),
    entry("Ta", "tantalum", 73, 180.9479),
    entry("W", "tungsten", 74, 183.85),
    entry("Re", "rhenium", 75, 186.207),
    entry("Os", "osmium", 76, 190.2),
    entry("Ir", "iridium", 77, 192.22),
    entry("Pt", "platinum", 78, 195.08),
    entry("Au", "gold", 79, 196.96654),
    entry("Hg", "mercury", 80, 200.59),
    entry("Tl", "thallium", 81, 204.3833),
    entry("Pb", "lead", 82, 207.2),
    entry("Bi", "bismuth", 83, 208.98037),
    entry("Po", "polonium", 84, 208.9824),
    entry("At", "astatine", 85, 209.9871),
    entry("Rn", "radon", 86, 222.0176),
    entry("Fr", "francium", 87, 223.0197),
    entry("Ra", "radium", 88, 226.0254),
    entry("Ac", "actinium", 89, 227.0279),
    entry("Th", "thorium", 90, 232.0381),
    entry("Pa", "protactinium", 91, 231.03588),
    entry("U", "uranium", 92, 238.0508),
    entry("Np", "neptunium", 93, 237.0482),
    entry("Pu", "plutonium", 94, 244.0482),
];

/// Isotope and pseudo-element entries, resolvable by symbol only.
///
/// `E` is the free electron (electron mass times the Avogadro constant);
/// its "weight" participates in mass bookkeeping for ionized species.
pub static ISOTOPE_TABLE: &[ElementData] = &[
    entry("D", "deuterium", 1, 2.0),
    entry("Tr", "tritium", 1, 3.0),
    entry("E", "electron", 0, 0.000545),
];
