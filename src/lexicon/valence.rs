// Built-in sentiment resources: term valences, degree adverbs, negators.
//
// Valences follow the VADER convention: mean human rating on a -4..=4
// scale. The table is a compact general-purpose subset weighted toward
// vocabulary common in political speech. A fuller VADER-format lexicon can
// be overlaid at runtime via `EnglishLexicon::with_valence_file`.

/// Magnitude a degree adverb adds to (or removes from) its neighbour.
pub const BOOSTER_INCREMENT: f64 = 0.293;
pub const BOOSTER_DECREMENT: f64 = -0.293;

pub const VALENCES: &[(&str, f64)] = &[
    // positive
    ("accomplish", 1.8),
    ("accomplished", 1.9),
    ("accomplishment", 2.1),
    ("achieve", 1.9),
    ("achieved", 1.9),
    ("achievement", 2.1),
    ("admire", 2.1),
    ("advantage", 1.0),
    ("agree", 1.5),
    ("amazing", 2.8),
    ("ambitious", 1.5),
    ("applaud", 2.0),
    ("appreciate", 1.7),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("benefit", 1.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bless", 1.8),
    ("blessed", 2.9),
    ("blessing", 2.2),
    ("bold", 1.6),
    ("brave", 2.4),
    ("bright", 1.9),
    ("brilliant", 2.8),
    ("care", 2.2),
    ("celebrate", 2.7),
    ("champion", 2.9),
    ("cheer", 2.3),
    ("confidence", 2.3),
    ("confident", 2.2),
    ("courage", 2.2),
    ("courageous", 2.4),
    ("cure", 1.6),
    ("delight", 2.9),
    ("dignity", 1.9),
    ("dream", 1.0),
    ("eager", 1.5),
    ("easy", 1.9),
    ("encourage", 2.3),
    ("enjoy", 2.2),
    ("enthusiasm", 1.9),
    ("excellent", 2.7),
    ("exciting", 2.2),
    ("fair", 1.3),
    ("faith", 1.8),
    ("fantastic", 2.6),
    ("favor", 1.7),
    ("fortunate", 1.9),
    ("free", 2.3),
    ("freedom", 3.2),
    ("friend", 2.2),
    ("friendly", 2.2),
    ("generous", 2.3),
    ("glad", 2.0),
    ("glorious", 3.2),
    ("good", 1.9),
    ("grateful", 2.0),
    ("great", 3.1),
    ("greatest", 3.2),
    ("growth", 1.6),
    ("happy", 2.7),
    ("harmony", 1.7),
    ("heal", 2.0),
    ("healthy", 1.7),
    ("help", 1.7),
    ("hero", 2.6),
    ("heroes", 2.3),
    ("honest", 2.3),
    ("honor", 2.2),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("importance", 1.5),
    ("improve", 1.9),
    ("improvement", 2.0),
    ("incredible", 2.5),
    ("independence", 1.2),
    ("inspire", 2.7),
    ("integrity", 2.2),
    ("joy", 2.8),
    ("justice", 2.4),
    ("kind", 2.4),
    ("leader", 1.4),
    ("liberty", 2.4),
    ("like", 1.5),
    ("love", 3.2),
    ("loyal", 2.1),
    ("lucky", 1.8),
    ("magnificent", 2.9),
    ("nice", 1.8),
    ("opportunity", 1.8),
    ("optimism", 2.5),
    ("optimistic", 1.3),
    ("outstanding", 3.0),
    ("patriot", 1.6),
    ("peace", 2.5),
    ("peaceful", 2.2),
    ("perfect", 2.7),
    ("pleased", 1.9),
    ("positive", 2.6),
    ("praise", 2.6),
    ("pride", 1.4),
    ("productive", 1.7),
    ("progress", 1.8),
    ("promise", 1.3),
    ("prosper", 2.1),
    ("prosperity", 2.1),
    ("prosperous", 2.1),
    ("protect", 1.6),
    ("proud", 2.1),
    ("recovery", 1.4),
    ("reform", 1.0),
    ("relief", 2.1),
    ("respect", 2.1),
    ("reward", 2.0),
    ("rich", 2.6),
    ("right", 1.0),
    ("safe", 1.9),
    ("safety", 1.8),
    ("save", 2.2),
    ("secure", 1.4),
    ("security", 1.4),
    ("smart", 1.7),
    ("solution", 1.3),
    ("splendid", 2.8),
    ("stability", 1.0),
    ("strength", 2.2),
    ("strong", 2.3),
    ("stronger", 2.1),
    ("succeed", 2.2),
    ("success", 2.7),
    ("successful", 2.8),
    ("support", 1.7),
    ("terrific", 2.1),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("tremendous", 2.2),
    ("triumph", 2.9),
    ("trust", 2.3),
    ("unity", 2.0),
    ("united", 1.8),
    ("victory", 2.8),
    ("vital", 1.2),
    ("welcome", 2.0),
    ("win", 2.8),
    ("wisdom", 2.4),
    ("wise", 2.1),
    ("wonderful", 2.7),
    ("worth", 0.9),
    // negative
    ("abandon", -1.9),
    ("abuse", -3.2),
    ("afraid", -2.2),
    ("aggression", -2.3),
    ("alarm", -1.4),
    ("anger", -2.7),
    ("angry", -2.3),
    ("anxiety", -0.7),
    ("attack", -2.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("betray", -3.2),
    ("bitter", -1.8),
    ("blame", -1.4),
    ("burden", -1.9),
    ("catastrophe", -3.4),
    ("chaos", -2.7),
    ("collapse", -2.2),
    ("conflict", -1.3),
    ("corrupt", -3.0),
    ("corruption", -3.1),
    ("crime", -2.5),
    ("criminal", -2.4),
    ("crisis", -3.1),
    ("cruel", -2.8),
    ("damage", -2.2),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("dead", -3.3),
    ("death", -2.9),
    ("debt", -1.5),
    ("decline", -1.1),
    ("defeat", -2.0),
    ("deficit", -1.7),
    ("depression", -2.7),
    ("desperate", -1.3),
    ("destroy", -2.5),
    ("destruction", -2.7),
    ("difficult", -1.5),
    ("disaster", -3.1),
    ("disease", -1.7),
    ("disgrace", -2.2),
    ("divided", -0.8),
    ("doubt", -1.5),
    ("enemy", -2.5),
    ("evil", -3.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fear", -2.2),
    ("fight", -1.6),
    ("fraud", -2.8),
    ("grief", -2.2),
    ("guilty", -1.8),
    ("harm", -2.5),
    ("hate", -2.7),
    ("hatred", -3.2),
    ("horrible", -2.5),
    ("hostile", -1.6),
    ("hunger", -1.0),
    ("hurt", -2.4),
    ("illegal", -2.6),
    ("injustice", -2.7),
    ("kill", -3.7),
    ("killed", -3.5),
    ("lie", -1.6),
    ("lose", -1.7),
    ("loss", -1.3),
    ("lost", -1.3),
    ("menace", -2.2),
    ("miserable", -2.2),
    ("murder", -3.7),
    ("neglect", -2.0),
    ("pain", -2.3),
    ("poor", -2.1),
    ("poverty", -2.3),
    ("problem", -1.7),
    ("recession", -1.8),
    ("reckless", -1.7),
    ("refuse", -1.2),
    ("sad", -2.1),
    ("scandal", -1.9),
    ("shame", -2.1),
    ("shortage", -1.3),
    ("sick", -2.3),
    ("struggle", -1.3),
    ("suffer", -2.1),
    ("suffering", -2.1),
    ("terrible", -2.1),
    ("terror", -3.0),
    ("terrorism", -3.6),
    ("terrorist", -3.7),
    ("threat", -2.4),
    ("threaten", -2.1),
    ("tragedy", -3.4),
    ("tragic", -3.1),
    ("trouble", -1.7),
    ("ugly", -2.3),
    ("unemployment", -1.9),
    ("unfair", -2.1),
    ("violence", -3.1),
    ("violent", -2.9),
    ("war", -2.9),
    ("weak", -1.9),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

pub const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCREMENT),
    ("amazingly", BOOSTER_INCREMENT),
    ("completely", BOOSTER_INCREMENT),
    ("considerably", BOOSTER_INCREMENT),
    ("deeply", BOOSTER_INCREMENT),
    ("enormously", BOOSTER_INCREMENT),
    ("entirely", BOOSTER_INCREMENT),
    ("especially", BOOSTER_INCREMENT),
    ("exceptionally", BOOSTER_INCREMENT),
    ("extremely", BOOSTER_INCREMENT),
    ("fully", BOOSTER_INCREMENT),
    ("greatly", BOOSTER_INCREMENT),
    ("highly", BOOSTER_INCREMENT),
    ("hugely", BOOSTER_INCREMENT),
    ("incredibly", BOOSTER_INCREMENT),
    ("intensely", BOOSTER_INCREMENT),
    ("most", BOOSTER_INCREMENT),
    ("more", BOOSTER_INCREMENT),
    ("particularly", BOOSTER_INCREMENT),
    ("profoundly", BOOSTER_INCREMENT),
    ("purely", BOOSTER_INCREMENT),
    ("quite", BOOSTER_INCREMENT),
    ("really", BOOSTER_INCREMENT),
    ("remarkably", BOOSTER_INCREMENT),
    ("so", BOOSTER_INCREMENT),
    ("substantially", BOOSTER_INCREMENT),
    ("thoroughly", BOOSTER_INCREMENT),
    ("totally", BOOSTER_INCREMENT),
    ("tremendously", BOOSTER_INCREMENT),
    ("truly", BOOSTER_INCREMENT),
    ("unbelievably", BOOSTER_INCREMENT),
    ("utterly", BOOSTER_INCREMENT),
    ("very", BOOSTER_INCREMENT),
    ("almost", BOOSTER_DECREMENT),
    ("barely", BOOSTER_DECREMENT),
    ("hardly", BOOSTER_DECREMENT),
    ("less", BOOSTER_DECREMENT),
    ("little", BOOSTER_DECREMENT),
    ("marginally", BOOSTER_DECREMENT),
    ("occasionally", BOOSTER_DECREMENT),
    ("partly", BOOSTER_DECREMENT),
    ("scarcely", BOOSTER_DECREMENT),
    ("slightly", BOOSTER_DECREMENT),
    ("somewhat", BOOSTER_DECREMENT),
];

pub const NEGATIONS: &[&str] = &[
    "ain't", "aint", "aren't", "arent", "cannot", "can't", "cant", "couldn't", "couldnt",
    "didn't", "didnt", "doesn't", "doesnt", "don't", "dont", "hadn't", "hadnt", "hasn't",
    "hasnt", "haven't", "havent", "isn't", "isnt", "neither", "never", "no", "nobody",
    "none", "nope", "nor", "not", "nothing", "nowhere", "rarely", "seldom", "shouldn't",
    "shouldnt", "wasn't", "wasnt", "weren't", "werent", "without", "won't", "wont",
    "wouldn't", "wouldnt",
];
