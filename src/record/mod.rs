//! Synthetic employee records
//!
//! Records are generated from whatever `Rng` the caller hands in. The binary uses
//! `rand::thread_rng()`, so its output is not reproducible across runs; tests pass a seeded
//! `StdRng` instead.
use rand::Rng;
use rand::distributions::{Distribution, Uniform};

pub const NAME_LEN: usize = 5;
pub const AGE_MIN: u32 = 20;
pub const AGE_MAX: u32 = 60;
pub const SALARY_MIN: u32 = 30000;
pub const SALARY_MAX: u32 = 80000;

/// Prefix shared by every key the loader writes
pub const KEY_PREFIX: &str = "employee:";

/// One generated employee, written to the store as a hash with fields `name`, `age`, `salary`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub age: u32,
    pub salary: u32
}

impl Employee {
    /// generates a random `Employee`
    ///
    /// Every name letter is drawn independently from `A..=Z`. Age and salary are uniform over
    /// their inclusive ranges.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let letters = Uniform::new_inclusive(b'A', b'Z');
        let name = (0..NAME_LEN)
            .map(|_| letters.sample(rng) as char)
            .collect::<String>();
        let age = Uniform::new_inclusive(AGE_MIN, AGE_MAX).sample(rng);
        let salary = Uniform::new_inclusive(SALARY_MIN, SALARY_MAX).sample(rng);
        Employee { name, age, salary }
    }

    /// The `(field, value)` pairs stored under the employee's key, in a fixed order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("age", self.age.to_string()),
            ("salary", self.salary.to_string())
        ]
    }
}

/// generates the storage key for the `index`-th employee
///
/// ```
///     use kvfill::record::employee_key;
///     assert_eq!(employee_key(42), "employee:42");
/// ```
pub fn employee_key(index: usize) -> String {
    format!("{}{}", KEY_PREFIX, index)
}
