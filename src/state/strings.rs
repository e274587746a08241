/// Built-in English string table
///
/// Ideas only carry `TextRef` handles; this is where they become text.

use super::data::TextRef;
use crate::error::ResourceError;

/// Title shown in the top bar
pub const APP_TITLE: &str = "30 Days of Being";

const UNSPLASH: &str = "Photo via Unsplash";

static STRINGS: &[(&str, &str)] = &[
    ("creative_title", "Creative"),
    ("creative_desc", "Try a new art form. Sketch, paint, write a short poem or build something with your hands, just for the joy of making it."),
    ("creative_ref", UNSPLASH),
    ("mindful_title", "Mindful"),
    ("mindful_desc", "Spend ten minutes paying attention to your breathing. Notice the sounds around you without judging them."),
    ("mindful_ref", UNSPLASH),
    ("respectful_title", "Respectful"),
    ("respectful_desc", "Listen to someone you disagree with until they finish. Ask a question before you answer."),
    ("respectful_ref", UNSPLASH),
    ("brave_title", "Brave"),
    ("brave_desc", "Do one small thing that scares you. Send the message, raise your hand, or sign up for the class."),
    ("brave_ref", UNSPLASH),
    ("helpful_title", "Helpful"),
    ("helpful_desc", "Offer a hand without being asked. Carry the groceries, answer the question, fix the squeaky door."),
    ("helpful_ref", UNSPLASH),
    ("smart_title", "Smart"),
    ("smart_desc", "Learn one new fact today and explain it to somebody else before the day ends."),
    ("smart_ref", UNSPLASH),
    ("happy_title", "Happy"),
    ("happy_desc", "Write down three things that made you smile today, however small they were."),
    ("happy_ref", UNSPLASH),
    ("funny_title", "Funny"),
    ("funny_desc", "Share a joke, watch a comedy, or laugh at your own mistakes. Laughter is contagious."),
    ("funny_ref", UNSPLASH),
    ("calm_title", "Calm"),
    ("calm_desc", "When something goes wrong, pause and count to five before reacting. Most storms pass quickly."),
    ("calm_ref", UNSPLASH),
    ("yourself_title", "Yourself"),
    ("yourself_desc", "Wear what you like, say what you mean and spend an hour on something that is only for you."),
    ("yourself_ref", UNSPLASH),
    ("good_title", "Good"),
    ("good_desc", "Do a kind deed anonymously. Leave a nice note, pay for a coffee or pick up litter."),
    ("good_ref", UNSPLASH),
    ("careful_title", "Careful"),
    ("careful_desc", "Double-check the details today. Read the message again before sending it and look both ways twice."),
    ("careful_ref", UNSPLASH),
    ("different_title", "Different"),
    ("different_desc", "Take a new route, try an unfamiliar dish or change your routine in one small way."),
    ("different_ref", UNSPLASH),
    ("casual_title", "Casual"),
    ("casual_desc", "Let go of perfection for a day. Relax, dress comfortably and enjoy an unplanned afternoon."),
    ("casual_ref", UNSPLASH),
    ("powerful_title", "Powerful"),
    ("powerful_desc", "Set one ambitious goal for the week and take the first concrete step toward it right now."),
    ("powerful_ref", UNSPLASH),
    ("special_title", "Special"),
    ("special_desc", "Celebrate something unique about yourself. Nobody else sees the world quite the way you do."),
    ("special_ref", UNSPLASH),
    ("strong_title", "Strong"),
    ("strong_desc", "Move your body. Go for a walk, stretch, lift something heavy or dance in the kitchen."),
    ("strong_ref", UNSPLASH),
    ("exciting_title", "Exciting"),
    ("exciting_desc", "Plan an adventure, even a tiny one. Visit a place nearby you have never been to."),
    ("exciting_ref", UNSPLASH),
    ("responsible_title", "Responsible"),
    ("responsible_desc", "Finish the task you have been putting off. Future you will be grateful."),
    ("responsible_ref", UNSPLASH),
    ("nice_title", "Nice"),
    ("nice_desc", "Give three sincere compliments today and notice how people light up."),
    ("nice_ref", UNSPLASH),
    ("selfless_title", "Selfless"),
    ("selfless_desc", "Give some of your time to a cause you care about, without expecting anything back."),
    ("selfless_ref", UNSPLASH),
    ("caring_title", "Caring"),
    ("caring_desc", "Call a friend or relative you have not talked to in a while and ask how they are really doing."),
    ("caring_ref", UNSPLASH),
    ("positive_title", "Positive"),
    ("positive_desc", "Catch one negative thought and rewrite it as something hopeful."),
    ("positive_ref", UNSPLASH),
    ("capable_title", "Capable"),
    ("capable_desc", "Remember a challenge you already overcame. You can handle today too."),
    ("capable_ref", UNSPLASH),
    ("organized_title", "Organized"),
    ("organized_desc", "Tidy one drawer, one folder or one inbox. Small order makes room for clear thinking."),
    ("organized_ref", UNSPLASH),
    ("sharp_title", "Sharp"),
    ("sharp_desc", "Solve a puzzle, play a strategy game or read something that makes you think hard."),
    ("sharp_ref", UNSPLASH),
    ("thankful_title", "Thankful"),
    ("thankful_desc", "Tell someone exactly why you are grateful for them."),
    ("thankful_ref", UNSPLASH),
    ("hygienic_title", "Hygienic"),
    ("hygienic_desc", "Take care of the basics. Drink water, wash up and get a good night of sleep."),
    ("hygienic_ref", UNSPLASH),
    ("determined_title", "Determined"),
    ("determined_desc", "Pick something hard and keep at it for twenty focused minutes, no matter what."),
    ("determined_ref", UNSPLASH),
    ("free_title", "Free"),
    ("free_desc", "Unplug for an hour. No screens, no schedule, just time that belongs to you."),
    ("free_ref", UNSPLASH),
];

/// Resolve a text handle against the built-in table
pub fn resolve(text: TextRef) -> Result<&'static str, ResourceError> {
    STRINGS
        .iter()
        .find(|(key, _)| *key == text.0)
        .map(|(_, value)| *value)
        .ok_or(ResourceError::MissingText(text.0))
}

/// Headline prefix for a card at the given display position
pub fn day_label(position: usize) -> String {
    format!("Day {}", position)
}
