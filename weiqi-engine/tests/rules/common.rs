use weiqi_engine::{Engine, Intersection, Point, Stone};

/// Route engine logs to the test harness. Set `RUST_LOG=weiqi_engine=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Play alternating moves starting with Black, asserting each one is legal.
pub fn play_all(engine: &mut Engine, moves: &[Point]) {
    for &(x, y) in moves {
        let stone = engine.current_turn();
        assert!(engine.place_stone(x, y), "{stone} at {:?} was rejected", (x, y));
    }
}

pub fn at(engine: &Engine, (x, y): Point) -> Intersection {
    engine.snapshot()[y as usize * engine.size() as usize + x as usize]
}

/// Every group on the board has a liberty, and the board agrees with the group records.
pub fn assert_no_dead_groups(engine: &Engine) {
    for (id, group) in engine.groups().iter() {
        assert!(
            group.liberties(engine.goban()) > 0,
            "group at {:?} has no liberties",
            group.stones().first()
        );
        for &p in group.stones() {
            assert_eq!(engine.goban().get(p), Some(id));
        }
    }

    let stones = engine.snapshot().iter().filter(|s| !s.is_empty()).count();
    let grouped: usize = engine.groups().iter().map(|(_, g)| g.size()).sum();
    assert_eq!(stones, grouped);
}

pub fn count(engine: &Engine, stone: Stone) -> usize {
    engine
        .snapshot()
        .iter()
        .filter(|&&s| s == Intersection::from(stone))
        .count()
}

/// Xorshift64 PRNG, deterministic so failures reproduce.
pub struct Rng(u64);

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng(seed.max(1))
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn range(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}
