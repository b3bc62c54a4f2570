pub const SECTOR_COUNT: usize = 6;
pub const SECTOR_WIDTH_DEGREES: f64 = 60.0;
pub const FULL_TURN_DEGREES: f64 = 360.0;

// The pointer sits at 3 o'clock, a quarter turn clockwise from the top of the wheel.
pub const POINTER_OFFSET_DEGREES: f64 = 90.0;

pub const CATALOG_GROUP_COUNT: usize = 4;
pub const MAX_REGENERATIONS: u32 = 3;
pub const REGENERATION_COSTS: [u32; 3] = [25, 50, 99];

pub const FREE_SPINS_MARKER: &str = "Giros Grátis";
pub const SPECIAL_SPIN_MARKER: &str = "Giro Especial";
pub const FREE_SPINS_GRANT: u32 = 3;
pub const SPECIAL_SPIN_GRANT: u32 = 1;

// Spin physics, in degrees per animation frame
pub const MIN_INITIAL_VELOCITY: f64 = 15.0;
pub const MAX_INITIAL_VELOCITY: f64 = 25.0;
pub const FRICTION: f64 = 0.1;
pub const STOP_THRESHOLD: f64 = 0.1;
pub const MIN_TURNS: u32 = 3;

pub const SETTLE_DELAY_MS: u32 = 500;
pub const TICK_PULSE_MS: u32 = 150;

pub const DEFAULT_REGULAR_SPINS: u32 = 1;
pub const DEFAULT_SPECIAL_SPINS: u32 = 0;
pub const DEFAULT_CURRENCY_BALANCE: u32 = 150;

pub const SPIN_BLOCKED_ERROR: &str = "Sem Giros Disponíveis";
pub const REGENERATION_LIMIT_ERROR: &str = "Limite de renovações atingido";
pub const INSUFFICIENT_FUNDS_ERROR: &str = "Moedas insuficientes";
