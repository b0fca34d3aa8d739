use chrono::NaiveDate;
use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::company::en::CatchPhrase;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

pub fn person_name(rng: &mut ChaCha8Rng) -> String {
    Name().fake_with_rng(rng)
}

pub fn safe_email(rng: &mut ChaCha8Rng) -> String {
    SafeEmail().fake_with_rng(rng)
}

pub fn city(rng: &mut ChaCha8Rng) -> String {
    CityName().fake_with_rng(rng)
}

pub fn catch_phrase(rng: &mut ChaCha8Rng) -> String {
    CatchPhrase().fake_with_rng(rng)
}

/// Uniform date in `[start, end]`, both ends inclusive.
pub fn date_between(rng: &mut ChaCha8Rng, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days().max(0);
    let offset = rng.random_range(0..=span);
    start + chrono::Duration::days(offset)
}

/// Uniform pick from a non-empty slice.
pub fn pick<'a, T>(items: &'a [T], rng: &mut ChaCha8Rng) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn date_between_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let start = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap();
        for _ in 0..200 {
            let date = date_between(&mut rng, start, end);
            assert!(date >= start && date <= end);
        }
    }

    #[test]
    fn date_between_single_day() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(date_between(&mut rng, day, day), day);
    }

    #[test]
    fn fake_values_are_deterministic() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);

        assert_eq!(person_name(&mut a), person_name(&mut b));
        assert_eq!(safe_email(&mut a), safe_email(&mut b));
        assert_eq!(city(&mut a), city(&mut b));
        assert_eq!(catch_phrase(&mut a), catch_phrase(&mut b));
    }

    #[test]
    fn safe_email_looks_like_an_address() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let email = safe_email(&mut rng);
        assert!(email.contains('@'), "{email}");
    }
}
