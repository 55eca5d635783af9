// Input documents and their expected index output

#![allow(dead_code)]

pub const FRUIT_TEXT: &str = "Apple banana apple.\nBanana cherry\n";

pub const FRUIT_EXPECTED: &str = "apple 1, \nbanana 1, 2, \ncherry 2, \n";

pub const PUNCTUATION_TEXT: &str = "a-b,c;d";

pub const PUNCTUATION_EXPECTED: &str = "a 1, \nb 1, \nc 1, \nd 1, \n";

pub const PROSE_TEXT: &str = "\
It was the best of times, it was the worst of times;
it was the age of wisdom: it was the age of foolishness.

(Charles Dickens) - 1859
Times change.
";

pub const PROSE_EXPECTED: &str = "\
age 2, 
best 1, 
change 5, 
charles 4, 
dickens 4, 
foolishness 2, 
it 1, 2, 
of 1, 2, 
the 1, 2, 
times 1, 5, 
was 1, 2, 
wisdom 2, 
worst 1, 
";

pub const MIXED_TEXT: &str = "Don't stop_now 42times\r\nnaïve café\n";

pub const MIXED_EXPECTED: &str = "\
caf 2, 
don 1, 
na 2, 
now 1, 
stop 1, 
t 1, 
times 1, 
ve 2, 
";
