/**
 * Jokes
 *
 * A fixed list served from GET /api/jokes, used by the frontend as a
 * smoke test, plus the GET / liveness text.
 */

use axum::response::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Joke {
    pub id: u32,
    pub setup: &'static str,
    pub punchline: &'static str,
}

pub static JOKES: [Joke; 5] = [
    Joke {
        id: 1,
        setup: "Why don't scientists trust atoms?",
        punchline: "Because they make up everything!",
    },
    Joke {
        id: 2,
        setup: "Why did the scarecrow win an award?",
        punchline: "Because he was outstanding in his field!",
    },
    Joke {
        id: 3,
        setup: "Why don't skeletons fight each other?",
        punchline: "They don't have the guts.",
    },
    Joke {
        id: 4,
        setup: "What do you call fake spaghetti?",
        punchline: "An impasta!",
    },
    Joke {
        id: 5,
        setup: "Why did the bicycle fall over?",
        punchline: "Because it was two-tired!",
    },
];

pub async fn list_jokes() -> Json<&'static [Joke]> {
    Json(&JOKES[..])
}

pub async fn root() -> &'static str {
    "API is running..."
}
