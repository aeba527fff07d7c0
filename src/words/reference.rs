//! Built-in word lists.
//!
//! These are fixed data: the ANSI CORE requirement, the literal list of
//! words the interpreter shipped with when this tool was written, and the
//! short list of words spot-checked by the recent-additions section.

/// ANSI Forth CORE word set (133 words).
pub const ANSI_CORE_WORDS: &[&str] = &[
    "!", "#", "#>", "#S", "'", "(", "*", "*/", "*/MOD", "+", "+!", "+LOOP", ",", "-", ".", ".\"",
    "/", "/MOD", "0<", "0=", "1+", "1-", "2!", "2*", "2/", "2@", "2DROP", "2DUP", "2OVER", "2SWAP",
    ":", ";", "<", "<#", "=", ">", ">BODY", ">IN", ">NUMBER", ">R", "?DUP", "@", "ABORT", "ABORT\"",
    "ABS", "ACCEPT", "ALIGN", "ALIGNED", "ALLOT", "AND", "BASE", "BEGIN", "BL", "C!", "C,", "C@",
    "CELL+", "CELLS", "CHAR", "CHAR+", "CHARS", "CONSTANT", "COUNT", "CR", "CREATE", "DECIMAL",
    "DEPTH", "DO", "DOES>", "DROP", "DUP", "ELSE", "EMIT", "ENVIRONMENT?", "EVALUATE", "EXECUTE",
    "EXIT", "FILL", "FIND", "FM/MOD", "HERE", "HOLD", "I", "IF", "IMMEDIATE", "INVERT", "J", "KEY",
    "LEAVE", "LITERAL", "LOOP", "LSHIFT", "M*", "MAX", "MIN", "MOD", "MOVE", "NEGATE", "OR", "OVER",
    "POSTPONE", "QUIT", "R>", "R@", "RECURSE", "REPEAT", "ROT", "RSHIFT", "S\"", "S>D", "SIGN",
    "SM/REM", "SOURCE", "SPACE", "SPACES", "STATE", "SWAP", "THEN", "TYPE", "U.", "U<", "UM*",
    "UM/MOD", "UNLOOP", "UNTIL", "VARIABLE", "WHILE", "WORD", "XOR", "[", "[']", "[CHAR]", "]",
];

/// Words the interpreter implemented at the time the literal list was taken.
///
/// Spelled the way the interpreter registers them; comparison folds case.
pub const LITERAL_CURRENT_WORDS: &[&str] = &[
    "!", "*", "*/", "+", "+!", "-", ".", ".\"", "/", "<", "<=", "<>", "=", ">", ">=", "?", "@",
    "0<", "0=", "0>", "1+", "1-", "2*", "2/", "2drop", "2dup", "2swap", "?dup", "abs", "and",
    "begin", "c!", "c@", "constant", "count", "cr", "create", "depth", "do", "does>", "drop",
    "dup", "else", "emit", "evaluate", "execute", "f.", ">float", ">int", "fm/mod", "i", "if",
    "immediate", "j", "key", "key?", "leave", "+loop", "loop", "max", "min", "*/mod", "/mod",
    "mod", "negate", "not", "or", "over", "pick", "quit", ">r", "r>", "r@", "repeat", "roll",
    "rot", ".s", "s\"", "space", "sqrt", "swap", "then", "turnkey", "type", "until", "variable",
    "while", "words", "bye", "abort",
];

/// Words checked by the "recent additions" section, in display order.
pub const RECENT_ADDITIONS: &[&str] = &[
    "HERE", "ALLOT", ",", "C,", "BL", "SPACES", "DECIMAL", "BASE", "STATE", "INVERT", "XOR", "U.",
    "U<", "2OVER", "UNLOOP", ":", ";",
];
