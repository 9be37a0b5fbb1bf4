//! Bundled lookup data.
//!
//! Static, versioned tables compiled into the crate.  The registry turns each
//! of them into a compiled alternation once; nothing here is consulted at
//! match time except through [`LookupTable`](crate::registry::LookupTable).

/// Version of the bundled tables; bump whenever an entry changes output.
pub const LEXICON_VERSION: &str = "2024.2";

// ─────────────────────────────────────────────────────────────────────────────
// Contractions: matched case-insensitively, looked up exact-case first
// ─────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "am not"), ("aren't", "are not"), ("can't", "cannot"), ("can't've", "cannot have"),
    ("'cause", "because"), ("could've", "could have"), ("couldn't", "could not"),
    ("couldn't've", "could not have"), ("didn't", "did not"), ("doesn't", "does not"),
    ("don't", "do not"), ("hadn't", "had not"), ("hadn't've", "had not have"), ("hasn't", "has not"),
    ("haven't", "have not"), ("he'd", "he had"), ("he'd've", "he would have"), ("he'll", "he will"),
    ("he'll've", "he will have"), ("he's", "he is"), ("how'd", "how did"), ("how'd'y", "how do you"),
    ("how'll", "how will"), ("how's", "how is"), ("I'd", "I had"), ("I'd've", "I would have"),
    ("I'll", "I will"), ("I'll've", "I will have"), ("I'm", "I am"), ("I've", "I have"),
    ("isn't", "is not"), ("it'd", "it had"), ("it'd've", "it would have"), ("it'll", "it will"),
    ("it'll've", "it will have"), ("it's", "it is"), ("let's", "let us"), ("ma'am", "madam"),
    ("mayn't", "may not"), ("might've", "might have"), ("mightn't", "might not"),
    ("mightn't've", "might not have"), ("must've", "must have"), ("mustn't", "must not"),
    ("mustn't've", "must not have"), ("needn't", "need not"), ("needn't've", "need not have"),
    ("o'clock", "of the clock"), ("oughtn't", "ought not"), ("oughtn't've", "ought not have"),
    ("shan't", "shall not"), ("sha'n't", "shall not"), ("shan't've", "shall not have"),
    ("she'd", "she had"), ("she'd've", "she would have"), ("she'll", "she will"),
    ("she'll've", "she will have"), ("she's", "she is"), ("should've", "should have"),
    ("shouldn't", "should not"), ("shouldn't've", "should not have"), ("so've", "so have"),
    ("so's", "so is"), ("that'd", "that had"), ("that'd've", "that would have"), ("that's", "that is"),
    ("there'd", "there had"), ("there'd've", "there would have"), ("there's", "there is"),
    ("they'd", "they had"), ("they'd've", "they would have"), ("they'll", "they will"),
    ("they'll've", "they will have"), ("they're", "they are"), ("they've", "they have"),
    ("to've", "to have"), ("wasn't", "was not"), ("we'd", "we had"), ("we'd've", "we would have"),
    ("we'll", "we will"), ("we'll've", "we will have"), ("we're", "we are"), ("we've", "we have"),
    ("weren't", "were not"), ("what'll", "what will"), ("what'll've", "what will have"),
    ("what're", "what are"), ("what's", "what is"), ("what've", "what have"), ("when's", "when is"),
    ("when've", "when have"), ("where'd", "where did"), ("where's", "where is"),
    ("where've", "where have"), ("who'll", "who will"), ("who'll've", "who will have"),
    ("who's", "who is"), ("who've", "who have"), ("why's", "why is"), ("why've", "why have"),
    ("will've", "will have"), ("won't", "will not"), ("won't've", "will not have"),
    ("would've", "would have"), ("wouldn't", "would not"), ("wouldn't've", "would not have"),
    ("y'all", "you all"), ("y'all'd", "you all would"), ("y'all'd've", "you all would have"),
    ("y'all're", "you all are"), ("y'all've", "you all have"), ("you'd", "you had"),
    ("you'd've", "you would have"), ("you'll", "you will"), ("you'll've", "you will have"),
    ("you're", "you are"), ("you've", "you have"),
];

// ─────────────────────────────────────────────────────────────────────────────
// Informal forms: whole-token, case-sensitive
// ─────────────────────────────────────────────────────────────────────────────

/// Typos and slang; applied first, before acronyms and abbreviations.
#[rustfmt::skip]
pub const TYPOS_SLANG: &[(&str, &str)] = &[
    ("w/e", "whatever"), ("usagov", "usa government"), ("recentlu", "recently"),
    ("ph0tos", "photos"), ("amirite", "am i right"), ("exp0sed", "exposed"), ("<3", "love"),
    ("luv", "love"), ("amageddon", "armageddon"), ("trfc", "traffic"), ("16yr", "16 year"),
];

/// Domain acronyms; applied second.
#[rustfmt::skip]
pub const ACRONYMS: &[(&str, &str)] = &[
    ("mh370", "malaysia airlines flight 370"), ("okwx", "oklahoma city weather"),
    ("arwx", "arkansas weather"), ("gawx", "georgia weather"), ("scwx", "south carolina weather"),
    ("cawx", "california weather"), ("tnwx", "tennessee weather"), ("azwx", "arizona weather"),
    ("alwx", "alabama weather"), ("usnwsgov", "united states national weather service"),
    ("2mw", "tomorrow"),
];

/// General chat abbreviations; applied last.
#[rustfmt::skip]
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("$", " dollar "), ("€", " euro "), ("4ao", "for adults only"), ("a.m", "before midday"),
    ("a3", "anytime anywhere anyplace"), ("aamof", "as a matter of fact"), ("acct", "account"),
    ("adih", "another day in hell"), ("afaic", "as far as i am concerned"),
    ("afaict", "as far as i can tell"), ("afaik", "as far as i know"),
    ("afair", "as far as i remember"), ("afk", "away from keyboard"), ("app", "application"),
    ("approx", "approximately"), ("apps", "applications"), ("asap", "as soon as possible"),
    ("asl", "age, sex, location"), ("atk", "at the keyboard"), ("ave.", "avenue"),
    ("aymm", "are you my mother"), ("ayor", "at your own risk"), ("b&b", "bed and breakfast"),
    ("b+b", "bed and breakfast"), ("b.c", "before christ"), ("b2b", "business to business"),
    ("b2c", "business to customer"), ("b4", "before"), ("b4n", "bye for now"),
    ("b@u", "back at you"), ("bae", "before anyone else"), ("bak", "back at keyboard"),
    ("bbbg", "bye bye be good"), ("bbc", "british broadcasting corporation"),
    ("bbias", "be back in a second"), ("bbl", "be back later"), ("bbs", "be back soon"),
    ("be4", "before"), ("bfn", "bye for now"), ("blvd", "boulevard"), ("bout", "about"),
    ("brb", "be right back"), ("bros", "brothers"), ("brt", "be right there"),
    ("bsaaw", "big smile and a wink"), ("btw", "by the way"), ("bwl", "bursting with laughter"),
    ("c/o", "care of"), ("cet", "central european time"), ("cf", "compare"),
    ("cia", "central intelligence agency"), ("csl", "can not stop laughing"), ("cu", "see you"),
    ("cul8r", "see you later"), ("cv", "curriculum vitae"), ("cwot", "complete waste of time"),
    ("cya", "see you"), ("cyt", "see you tomorrow"), ("dae", "does anyone else"),
    ("dbmib", "do not bother me i am busy"), ("diy", "do it yourself"), ("dm", "direct message"),
    ("dwh", "during work hours"), ("e123", "easy as one two three"),
    ("eet", "eastern european time"), ("eg", "example"), ("embm", "early morning business meeting"),
    ("encl", "enclosed"), ("encl.", "enclosed"), ("etc", "and so on"),
    ("faq", "frequently asked questions"), ("fawc", "for anyone who cares"), ("fb", "facebook"),
    ("fc", "fingers crossed"), ("fig", "figure"), ("fimh", "forever in my heart"), ("ft.", "feet"),
    ("ft", "featuring"), ("ftl", "for the loss"), ("ftw", "for the win"),
    ("fwiw", "for what it is worth"), ("fyi", "for your information"), ("g9", "genius"),
    ("gahoy", "get a hold of yourself"), ("gal", "get a life"),
    ("gcse", "general certificate of secondary education"), ("gfn", "gone for now"),
    ("gg", "good game"), ("gl", "good luck"), ("glhf", "good luck have fun"),
    ("gmt", "greenwich mean time"), ("gmta", "great minds think alike"), ("gn", "good night"),
    ("g.o.a.t", "greatest of all time"), ("goat", "greatest of all time"), ("goi", "get over it"),
    ("gps", "global positioning system"), ("gr8", "great"), ("gratz", "congratulations"),
    ("gyal", "girl"), ("h&c", "hot and cold"), ("hp", "horsepower"), ("hr", "hour"),
    ("hrh", "his royal highness"), ("ht", "height"), ("ibrb", "i will be right back"),
    ("ic", "i see"), ("icq", "i seek you"), ("icymi", "in case you missed it"),
    ("idc", "i do not care"), ("idgadf", "i do not give a damn fuck"),
    ("idgaf", "i do not give a fuck"), ("idk", "i do not know"), ("ie", "that is"), ("i.e", "that is"),
    ("ifyp", "i feel your pain"), ("IG", "instagram"), ("iirc", "if i remember correctly"),
    ("ilu", "i love you"), ("ily", "i love you"), ("imho", "in my humble opinion"),
    ("imo", "in my opinion"), ("imu", "i miss you"), ("iow", "in other words"),
    ("irl", "in real life"), ("j4f", "just for fun"), ("jic", "just in case"),
    ("jk", "just kidding"), ("jsyk", "just so you know"), ("l8r", "later"), ("lb", "pound"),
    ("lbs", "pounds"), ("ldr", "long distance relationship"), ("lmao", "laugh my ass off"),
    ("lmfao", "laugh my fucking ass off"), ("lol", "laughing out loud"), ("ltd", "limited"),
    ("ltns", "long time no see"),
    ("m8", "mate"), ("mf", "motherfucker"), ("mfs", "motherfuckers"), ("mfw", "my face when"),
    ("mofo", "motherfucker"), ("mph", "miles per hour"), ("mr", "mister"),
    ("mrw", "my reaction when"), ("ms", "miss"), ("mte", "my thoughts exactly"),
    ("nagi", "not a good idea"), ("nbc", "national broadcasting company"),
    ("nbd", "not big deal"), ("nfs", "not for sale"), ("ngl", "not going to lie"),
    ("nhs", "national health service"), ("nrn", "no reply necessary"),
    ("nsfl", "not safe for life"), ("nsfw", "not safe for work"), ("nth", "nice to have"),
    ("nvr", "never"), ("nyc", "new york city"), ("oc", "original content"), ("og", "original"),
    ("ohp", "overhead projector"), ("oic", "oh i see"), ("omdb", "over my dead body"),
    ("omg", "oh my god"), ("omw", "on my way"), ("p.a", "per annum"), ("p.m", "after midday"),
    ("pm", "prime minister"), ("poc", "people of color"), ("pov", "point of view"),
    ("pp", "pages"), ("ppl", "people"), ("prw", "parents are watching"), ("ps", "postscript"),
    ("pt", "point"), ("ptb", "please text back"), ("pto", "please turn over"),
    ("qpsa", "what happens"), ("ratchet", "rude"), ("rbtl", "read between the lines"),
    ("rlrt", "real life retweet"), ("rofl", "rolling on the floor laughing"),
    ("roflol", "rolling on the floor laughing out loud"),
    ("rotflmao", "rolling on the floor laughing my ass off"), ("rt", "retweet"),
    ("ruok", "are you ok"), ("sfw", "safe for work"), ("sk8", "skate"),
    ("smh", "shake my head"), ("sq", "square"), ("srsly", "seriously"),
    ("ssdd", "same stuff different day"), ("tbh", "to be honest"), ("tbs", "tablespoonful"),
    ("tbsp", "tablespoonful"), ("tfw", "that feeling when"), ("thks", "thank you"),
    ("tho", "though"), ("thx", "thank you"), ("tia", "thanks in advance"),
    ("til", "today i learned"), ("tl;dr", "too long i did not read"),
    ("tldr", "too long i did not read"), ("tmb", "tweet me back"),
    ("tntl", "trying not to laugh"), ("ttyl", "talk to you later"), ("u", "you"),
    ("u2", "you too"), ("u4e", "yours for ever"), ("utc", "coordinated universal time"),
    ("w/", "with"), ("w/o", "without"), ("w8", "wait"), ("wassup", "what is up"),
    ("wb", "welcome back"), ("wtf", "what the fuck"), ("wtg", "way to go"), ("wtpa", "where the party at"),
    ("wuf", "where are you from"), ("wuzup", "what is up"), ("wywh", "wish you were here"),
    ("yd", "yard"), ("ygtr", "you got that right"), ("ynk", "you never know"),
    ("zzz", "sleeping bored and tired"),
];

// ─────────────────────────────────────────────────────────────────────────────
// Emoticons: punctuation glyphs and their descriptions
// ─────────────────────────────────────────────────────────────────────────────

/// Western and eastern emoticons.  Entries that collide with ordinary words
/// or letter pairs (`D:`, `XP`, `:b`) are deliberately absent.
#[rustfmt::skip]
pub const EMOTICONS: &[(&str, &str)] = &[
    (":‑)", "Happy face or smiley"), (":-)", "Happy face or smiley"), (":)", "Happy face or smiley"),
    (":-]", "Happy face or smiley"), (":]", "Happy face or smiley"), (":-3", "Happy face smiley"),
    (":3", "Happy face smiley"), (":->", "Happy face smiley"), (":>", "Happy face smiley"),
    ("8-)", "Happy face smiley"), (":-}", "Happy face smiley"), (":}", "Happy face smiley"),
    (":o)", "Happy face smiley"), (":c)", "Happy face smiley"), (":^)", "Happy face smiley"),
    ("=]", "Happy face smiley"), ("=)", "Happy face smiley"),
    (":‑D", "Laughing, big grin or laugh with glasses"), (":-D", "Laughing, big grin or laugh with glasses"),
    (":D", "Laughing, big grin or laugh with glasses"), ("8‑D", "Laughing, big grin or laugh with glasses"),
    ("8D", "Laughing, big grin or laugh with glasses"), ("X‑D", "Laughing, big grin or laugh with glasses"),
    ("=D", "Laughing, big grin or laugh with glasses"), ("=3", "Laughing, big grin or laugh with glasses"),
    ("B^D", "Laughing, big grin or laugh with glasses"), (":-))", "Very happy"),
    (":‑(", "Frown, sad, angry or pouting"), (":-(", "Frown, sad, angry or pouting"),
    (":(", "Frown, sad, angry or pouting"), (":‑c", "Frown, sad, angry or pouting"),
    (":‑<", "Frown, sad, angry or pouting"), (":<", "Frown, sad, angry or pouting"),
    (":‑[", "Frown, sad, angry or pouting"), (":[", "Frown, sad, angry or pouting"),
    (":-||", "Frown, sad, angry or pouting"), (">:[", "Frown, sad, angry or pouting"),
    (":{", "Frown, sad, angry or pouting"), (":@", "Frown, sad, angry or pouting"),
    (">:(", "Frown, sad, angry or pouting"), (":'‑(", "Crying"), (":'-(", "Crying"), (":'(", "Crying"),
    (":'‑)", "Tears of happiness"), (":'-)", "Tears of happiness"), (":')", "Tears of happiness"),
    ("D‑':", "Horror"), ("D:<", "Disgust"), ("D8", "Great dismay"), ("D;", "Great dismay"),
    ("D=", "Great dismay"), (":‑O", "Surprise"), (":-O", "Surprise"), (":O", "Surprise"),
    (":‑o", "Surprise"), (":-o", "Surprise"), (":-0", "Shock"), ("8‑0", "Yawn"), (">:O", "Yawn"),
    (":-*", "Kiss"), (":*", "Kiss"), (";‑)", "Wink or smirk"), (";-)", "Wink or smirk"),
    (";)", "Wink or smirk"), ("*-)", "Wink or smirk"), ("*)", "Wink or smirk"), (";‑]", "Wink or smirk"),
    (";]", "Wink or smirk"), (";^)", "Wink or smirk"), (":‑,", "Wink or smirk"), (";D", "Wink or smirk"),
    (":‑P", "Tongue sticking out, cheeky, playful or blowing a raspberry"),
    (":-P", "Tongue sticking out, cheeky, playful or blowing a raspberry"),
    (":P", "Tongue sticking out, cheeky, playful or blowing a raspberry"),
    (":‑Þ", "Tongue sticking out, cheeky, playful or blowing a raspberry"),
    (":Þ", "Tongue sticking out, cheeky, playful or blowing a raspberry"),
    ("=p", "Tongue sticking out, cheeky, playful or blowing a raspberry"),
    (">:P", "Tongue sticking out, cheeky, playful or blowing a raspberry"),
    (":‑/", "Skeptical, annoyed, undecided, uneasy or hesitant"),
    (":-/", "Skeptical, annoyed, undecided, uneasy or hesitant"),
    (">:/", "Skeptical, annoyed, undecided, uneasy or hesitant"),
    ("=/", "Skeptical, annoyed, undecided, uneasy or hesitant"),
    (":S", "Skeptical, annoyed, undecided, uneasy or hesitant"),
    (":‑|", "Straight face"), (":-|", "Straight face"), (":|", "Straight face"),
    (":$", "Embarrassed or blushing"), (":‑x", "Sealed lips or wearing braces or tongue-tied"),
    (":-x", "Sealed lips or wearing braces or tongue-tied"), (":‑#", "Sealed lips or wearing braces or tongue-tied"),
    (":#", "Sealed lips or wearing braces or tongue-tied"), (":‑&", "Sealed lips or wearing braces or tongue-tied"),
    (":&", "Sealed lips or wearing braces or tongue-tied"),
    ("O:‑)", "Angel, saint or innocent"), ("O:-)", "Angel, saint or innocent"), ("O:)", "Angel, saint or innocent"),
    ("0:‑3", "Angel, saint or innocent"), ("0:3", "Angel, saint or innocent"),
    ("0:‑)", "Angel, saint or innocent"), ("0:)", "Angel, saint or innocent"), ("0;^)", "Angel, saint or innocent"),
    (">:‑)", "Evil or devilish"), (">:-)", "Evil or devilish"), (">:)", "Evil or devilish"),
    ("}:‑)", "Evil or devilish"), ("}:)", "Evil or devilish"), ("3:‑)", "Evil or devilish"),
    ("3:)", "Evil or devilish"), (">;)", "Evil or devilish"), ("|;‑)", "Cool"), ("|‑O", "Bored"),
    (":‑J", "Tongue-in-cheek"), ("#‑)", "Party all night"), ("%‑)", "Drunk or confused"),
    ("%)", "Drunk or confused"), (":-###..", "Being sick"), (":###..", "Being sick"),
    ("<:‑|", "Dump"), ("(>_<)", "Troubled"), ("(>_<)>", "Troubled"), ("(';')", "Baby"),
    ("(^^>``", "Nervous or Embarrassed or Troubled or Shy or Sweat drop"),
    ("(^_^;)", "Nervous or Embarrassed or Troubled or Shy or Sweat drop"),
    ("(-_-;)", "Nervous or Embarrassed or Troubled or Shy or Sweat drop"),
    ("(~_~;)", "Nervous or Embarrassed or Troubled or Shy or Sweat drop"),
    ("(-_-)zzz", "Sleeping"), ("(^_-)", "Wink"), ("((+_+))", "Confused"), ("(+o+)", "Confused"),
    ("(o|o)", "Ultraman"), ("^_^", "Joyful"), ("(^_^)/", "Joyful"), ("(^O^)／", "Joyful"),
    ("(^o^)／", "Joyful"), ("(__)", "Kowtow as a sign of respect, or dogeza for apology"),
    ("_(._.)_", "Kowtow as a sign of respect, or dogeza for apology"),
    ("<(_ _)>", "Kowtow as a sign of respect, or dogeza for apology"),
    ("<m(__)m>", "Kowtow as a sign of respect, or dogeza for apology"),
    ("m(__)m", "Kowtow as a sign of respect, or dogeza for apology"),
    ("m(_ _)m", "Kowtow as a sign of respect, or dogeza for apology"),
    ("('_')", "Sad or Crying"), ("(/_;)", "Sad or Crying"), ("(T_T)", "Sad or Crying"),
    ("(;_;)", "Sad or Crying"), ("(;_:)", "Sad or Crying"), ("(;O;)", "Sad or Crying"),
    ("(:_;)", "Sad or Crying"), ("(ToT)", "Sad or Crying"), (";_;", "Sad or Crying"),
    (";-;", "Sad or Crying"), (";n;", "Sad or Crying"), ("Q.Q", "Sad or Crying"),
    ("T.T", "Sad or Crying"), ("Q_Q", "Sad or Crying"), ("(-.-)", "Shame"), ("(-_-)", "Shame"),
    ("(=_=)", "Tired"), ("(=^·^=)", "cat"), ("(=^··^=)", "cat"), ("(..)", "Looking down"),
    ("(._.)", "Looking down"), ("^m^", "Giggling with hand covering mouth"),
    ("(・・?", "Confusion"), ("(?_?)", "Confusion"), (">^_^<", "Normal Laugh"),
    ("<^!^>", "Normal Laugh"), ("^/^", "Normal Laugh"), ("（*^_^*）", "Normal Laugh"),
    ("(^<^)", "Normal Laugh"), ("(^.^)", "Normal Laugh"), ("(^^)", "Normal Laugh"),
    ("(^_^.)", "Normal Laugh"), ("(^_^)", "Normal Laugh"), ("(*^_^*)", "Normal Laugh"),
    ("(#^.^#)", "Normal Laugh"), ("(^^)/", "Waving"), ("(^J^)", "Waving"),
    ("(*^0^*)", "Excited"), ("(*_*)", "Amazed"), ("(*_*;", "Amazed"), ("(+_+)", "Amazed"),
    ("(@_@)", "Amazed"), ("(*^^)v", "Laughing, Cheerful"), ("(^^)v", "Laughing, Cheerful"),
    ("(^_^)v", "Laughing, Cheerful"), ("(ーー;)", "Worried"), ("(^0_0^)", "Eyeglasses"),
    ("(＾ｖ＾)", "Happy"), ("(＾ｕ＾)", "Happy"), ("(^)o(^)", "Happy"), ("(^O^)", "Happy"),
    ("(^o^)", "Happy"), (")^o^(", "Happy"), (":O o_O", "Surprised"), ("o_0", "Surprised"),
    ("o.O", "Surprised"), ("(o.o)", "Surprised"), ("(*￣m￣)", "Dissatisfied"),
    ("(‘A`)", "Snubbed or Deflated"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(name: &str, table: &[(&str, &str)]) {
        let mut seen = HashSet::new();
        for (key, _) in table {
            assert!(seen.insert(*key), "duplicate key {:?} in {}", key, name);
        }
    }

    #[test]
    fn test_keys_unique() {
        assert_unique("CONTRACTIONS", CONTRACTIONS);
        assert_unique("TYPOS_SLANG", TYPOS_SLANG);
        assert_unique("ACRONYMS", ACRONYMS);
        assert_unique("ABBREVIATIONS", ABBREVIATIONS);
        assert_unique("EMOTICONS", EMOTICONS);
    }

    #[test]
    fn test_contractions_carry_apostrophe() {
        for (key, _) in CONTRACTIONS {
            assert!(key.contains('\''), "contraction without apostrophe: {}", key);
        }
    }

    #[test]
    fn test_no_empty_entries() {
        for table in [CONTRACTIONS, TYPOS_SLANG, ACRONYMS, ABBREVIATIONS, EMOTICONS] {
            for (key, value) in table {
                assert!(!key.is_empty() && !value.is_empty(), "empty entry {:?}", key);
            }
        }
    }
}
