//! Customer name generation from curated name lists.
//!
//! The Customers table stores first and last names in separate columns,
//! so the generator hands back both halves rather than a joined string.

use crate::rng::StreamRng;

/// Draws first and last names from fixed lists.
pub struct NameGenerator;

impl NameGenerator {
    /// Generate a (first, last) name pair.
    pub fn generate(rng: &mut StreamRng) -> (&'static str, &'static str) {
        let first = Self::generate_first_name(rng);
        let last = Self::generate_last_name(rng);
        (first, last)
    }

    pub fn generate_first_name(rng: &mut StreamRng) -> &'static str {
        *rng.pick(FIRST_NAMES)
    }

    pub fn generate_last_name(rng: &mut StreamRng) -> &'static str {
        *rng.pick(LAST_NAMES)
    }
}

const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Abigail", "Adrian", "Aiden", "Alan", "Alice", "Alma", "Amara",
    "Amelia", "Andre", "Angel", "Anita", "Arjun", "Audrey", "Ava", "Beatrice",
    "Bianca", "Blake", "Brandon", "Brenda", "Caleb", "Camila", "Carlos", "Carmen",
    "Cecilia", "Chloe", "Claire", "Colin", "Connor", "Daisy", "Dana", "Darius",
    "Deborah", "Derek", "Diana", "Dmitri", "Dolores", "Edgar", "Eleanor", "Elena",
    "Eli", "Elliot", "Emeka", "Emma", "Esther", "Ethan", "Evelyn", "Faith",
    "Felix", "Fiona", "Frances", "Gabriel", "Gloria", "Grace", "Hana", "Harold",
    "Hector", "Helen", "Hiro", "Ian", "Imani", "Irene", "Isaac", "Ivy",
    "Jamal", "Janet", "Javier", "Joan", "Jonah", "Julia", "Kai", "Karen",
    "Keith", "Kenji", "Layla", "Leah", "Leon", "Lila", "Lucas", "Lucy",
    "Malik", "Marcus", "Maria", "Martha", "Maya", "Miguel", "Nadia", "Naomi",
    "Nathan", "Nina", "Noah", "Olivia", "Omar", "Oscar", "Paige", "Pedro",
    "Priya", "Quentin", "Rachel", "Ravi", "Rosa", "Ruth", "Samuel", "Sofia",
    "Tariq", "Theo", "Tiana", "Uma", "Victor", "Vivian", "Walter", "Wendy",
    "Xavier", "Yara", "Yusuf", "Zane", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Adeyemi", "Alvarez", "Anderson", "Bailey", "Banerjee", "Barnes", "Bell",
    "Bennett", "Brooks", "Bryant", "Campbell", "Carter", "Castillo", "Chen", "Clark",
    "Coleman", "Cooper", "Cruz", "Daniels", "Davis", "Diaz", "Dixon", "Edwards",
    "Ellis", "Evans", "Fischer", "Flores", "Foster", "Garcia", "Gibson", "Gomez",
    "Graham", "Gray", "Griffin", "Gupta", "Hall", "Hamilton", "Harris", "Hayes",
    "Hernandez", "Hill", "Hughes", "Ito", "Jackson", "James", "Jenkins", "Johnson",
    "Kang", "Kelly", "Kennedy", "Khan", "Kim", "King", "Kowalski", "Lee",
    "Lewis", "Lopez", "Marshall", "Martin", "Mendoza", "Meyer", "Mitchell", "Morales",
    "Morgan", "Murphy", "Nakamura", "Nguyen", "Novak", "Okafor", "Olson", "Ortiz",
    "Owens", "Patel", "Perez", "Perry", "Phillips", "Powell", "Price", "Ramirez",
    "Reed", "Reyes", "Richardson", "Rivera", "Roberts", "Robinson", "Rossi", "Russell",
    "Sanchez", "Santos", "Schmidt", "Shah", "Silva", "Singh", "Stewart", "Sullivan",
    "Tanaka", "Taylor", "Thompson", "Torres", "Tran", "Turner", "Vargas", "Walker",
    "Wallace", "Ward", "Watson", "Webb", "White", "Williams", "Wilson", "Wong",
    "Wright", "Young", "Zhang",
];
