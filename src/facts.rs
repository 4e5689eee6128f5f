// Space fact shown in the top bar, picked once per app start.

use rand::Rng;

pub const SPACE_FACTS: [&str; 15] = [
    "There are more stars in the universe than grains of sand on Earth.",
    "One day on Venus is longer than one year on Venus.",
    "A year on Mercury is just 88 days long.",
    "The footprints on the Moon will be there for 100 million years.",
    "The Sun makes up 99.86% of the mass of our solar system.",
    "If you could fly to Pluto, it would take more than 800 years.",
    "A single teaspoon of a neutron star would weigh 6 billion tons.",
    "The largest known star is UY Scuti, about 1,700 times larger than our Sun.",
    "There may be more than 100 billion galaxies in the universe.",
    "Saturn's rings are made mostly of ice and rock particles.",
    "Jupiter's Great Red Spot is a storm that has been raging for over 300 years.",
    "The Milky Way galaxy will collide with Andromeda in about 4 billion years.",
    "Astronauts can grow up to 2 inches taller in space due to lack of gravity.",
    "The International Space Station orbits Earth every 90 minutes.",
    "Mars has the largest volcano in our solar system, Olympus Mons.",
];

/// Uniform random pick from the fact list.
pub fn random_fact() -> &'static str {
    let idx = rand::thread_rng().gen_range(0..SPACE_FACTS.len());
    SPACE_FACTS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_is_always_a_member_of_the_list() {
        for _ in 0..100 {
            assert!(SPACE_FACTS.contains(&random_fact()));
        }
    }
}
