use rand::Rng;

/// Facts used when the remote source cannot be reached or returns garbage.
pub const FALLBACK_FACTS: [&str; 10] = [
    "Honey never spoils. Archaeologists have found 3000-year-old honey in Egyptian tombs that was still perfectly edible.",
    "A day on Venus is longer than its year. Venus takes 243 Earth days to rotate once, but only 225 Earth days to orbit the Sun.",
    "Octopuses have three hearts and blue blood.",
    "Bananas are berries, but strawberries aren't.",
    "The shortest war in history lasted 38 minutes between Britain and Zanzibar in 1896.",
    "A group of flamingos is called a 'flamboyance'.",
    "The unicorn is the national animal of Scotland.",
    "Sharks existed before trees. Sharks have been around for about 400 million years, while trees evolved around 350 million years ago.",
    "The dot over the letter 'i' is called a tittle.",
    "Wombat poop is cube-shaped.",
];

/// Picks one of [`FALLBACK_FACTS`] uniformly at random.
pub fn pick_fallback_fact<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FALLBACK_FACTS[rng.random_range(0..FALLBACK_FACTS.len())]
}
