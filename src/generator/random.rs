use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::core::types::{Rating, User, UserId};

const FIRST_NAMES: &[&str] = &[
    "rahul", "priya", "amit", "sneha", "vijay", "anita", "rohan", "kavya",
    "arjun", "neha", "karan", "pooja", "aditya", "divya", "siddharth", "isha",
    "nikhil", "ritu", "varun", "megha", "akash", "shreya", "manish", "nisha",
    "rajesh", "swati", "deepak", "anjali", "suresh", "preeti",
];

const LAST_NAMES: &[&str] = &[
    "kumar", "sharma", "patel", "singh", "reddy", "gupta", "verma", "joshi",
    "mehta", "agarwal", "rao", "nair", "chopra", "khan", "das", "malhotra",
];

/// Random username and rating source for seeding a population.
///
/// Usernames follow a handful of realistic patterns and collide on purpose;
/// uniqueness is not required of usernames, only of ids.
pub struct UserGenerator {
    rng: StdRng,
}

impl UserGenerator {
    pub fn new() -> Self {
        UserGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible populations.
    pub fn with_seed(seed: u64) -> Self {
        UserGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn username(&mut self, id: u32) -> String {
        let first = FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())];

        match self.rng.gen_range(0..10) {
            0..=2 => first.to_string(),
            3..=4 => format!("{}_{}", first, last),
            5..=6 => format!("{}{}", first, self.rng.gen_range(0..100)),
            7 => format!("{}_{}{}", first, last, self.rng.gen_range(0..10)),
            _ => format!("user_{}", id),
        }
    }

    pub fn rating(&mut self, min: Rating, max: Rating) -> Rating {
        self.rng.gen_range(min..=max)
    }

    /// Generate `count` users with ids `1..=count` and random in-range
    /// ratings.
    pub fn population(&mut self, count: usize, min: Rating, max: Rating) -> Vec<(User, Rating)> {
        let mut seed = Vec::with_capacity(count);
        for id in 1..=count as u32 {
            let username = self.username(id);
            let rating = self.rating(min, max);
            seed.push((User::new(UserId(id), username), rating));
        }
        seed
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        UserGenerator::new()
    }
}
