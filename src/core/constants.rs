// Catalog (order is significant: probabilities and rare indices are positional)
pub const PRIZE_COUNT: usize = 8;
pub const PRIZE_NAMES: [&str; PRIZE_COUNT] = [
    "Moët",
    "Bottiglia Premium",
    "Raddoppia l'ordine",
    "Vino",
    "Drink a scelta",
    "Spritz",
    "Birra",
    "Miss",
];
pub const PRIZE_COSTS: [f64; PRIZE_COUNT] = [150.0, 100.0, 10.0, 60.0, 10.0, 10.0, 5.0, 0.0];
pub const PRIZE_ICONS: [&str; PRIZE_COUNT] = ["🍾", "🍷", "2️⃣", "🍷", "🍹", "🥂", "🍺", "❌"];
pub const PRIZE_COLORS: [&str; PRIZE_COUNT] = [
    "#FFD700", "#8B0000", "#4B0082", "#DC143C", "#1E90FF", "#FF8C00", "#FFD700", "#808080",
];

// Base probabilities in percentage points, tuned for ~1.95 expected cost per spin
pub const BASE_PROBABILITIES: [f64; PRIZE_COUNT] = [0.2, 0.4, 1.2, 0.8, 1.5, 2.5, 5.0, 88.4];
pub const PROBABILITY_TOTAL: f64 = 100.0;
pub const PROBABILITY_EPSILON: f64 = 1e-6;

// Pity
pub const PITY_ENABLED: bool = true;
pub const PITY_RARE_INDICES: [usize; 3] = [0, 1, 2];
pub const PITY_THRESHOLD_SPINS: u32 = 30;
pub const PITY_MULTIPLIER: f64 = 2.0;
pub const PITY_RESET_ON_WIN: bool = true;

// Run-time bookkeeping
pub const HISTORY_CAPACITY: usize = 10;
pub const SPIN_PRICE: f64 = 2.0;
