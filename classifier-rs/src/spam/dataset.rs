//! Built-in seed dataset used to train the model at startup

use super::types::{Label, TrainingRecord};

const SEED_SAMPLES: &[(&str, Label)] = &[
    (
        "URGENT! You have won a 1 week FREE membership in our £100,000 prize Jackpot! Txt the word: CLAIM to No: 81010 T&C www.dbuk.net",
        Label::Spam,
    ),
    ("Hi Tom, how are you doing?", Label::Ham),
    (
        "SIX chances to win CASH! From 100 to 20,000 pounds txt> CSH11 and send to 87575. Cost 150p/day, 6days, 16+ TsandCs apply",
        Label::Spam,
    ),
    ("Hello! How was your weekend?", Label::Ham),
    (
        "URGENT! Your Mobile No. was awarded £200 Bonus Caller Prize on 1/08. This is our 2nd attempt to contact YOU! Call 09066362231 ASAP! Box97N7QP, 150ppm",
        Label::Spam,
    ),
    ("Hi there, just checking in to see how you're doing.", Label::Ham),
    (
        "FREE RINGTONE text FIRST to 87131 for a poly or text GET to 87131 for a true tone! Help? 0845 2814032 16 after 1st free, tones are 3£",
        Label::Spam,
    ),
    ("Good morning! Have a great day ahead.", Label::Ham),
    (
        "URGENT! You have won a 1 week FREE membership in our £100,000 prize Jackpot! Txt the word: CLAIM to No: 81010 T&C www.dbuk.net",
        Label::Spam,
    ),
    ("Thanks for the update, I'll get back to you soon.", Label::Ham),
];

/// The ten labeled examples the service is seeded with
pub fn seed_records() -> Vec<TrainingRecord> {
    SEED_SAMPLES
        .iter()
        .map(|&(text, label)| TrainingRecord::new(text, label))
        .collect()
}
