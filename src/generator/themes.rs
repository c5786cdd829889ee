//! Built-in themes.
//!
//! Order matters for reproducible output under a fixed entropy source: the
//! first theme's first insult and first noun render as
//! "You code like a dairy farmer!".

use crate::generator::corpus::{ThemeDef, WordLists};
use crate::generator::shape::ArgumentShape::*;

pub static BUILTIN_THEMES: &[ThemeDef] = &[
    ThemeDef {
        name: "swordplay",
        insults: &[
            "You code like a %s!",
            "I've seen a %s write better code!",
            "A %s could push cleaner commits!",
            "My grandmother's %s has better coding skills!",
        ],
        comebacks: &[
            ("How appropriate. You fight like a %s.", Noun),
            ("And I thought you smelled like a %s.", Noun),
            ("I'm glad you attended your %s family reunion.", Noun),
            ("At least a %s can learn. You can't.", Noun),
            ("I'd rather spend a week %s a %s than pair with you.", GerundNoun),
        ],
        words: WordLists {
            nouns: &[
                "dairy farmer",
                "cow",
                "rubber duck",
                "sea sponge",
                "three-headed monkey",
                "bilge rat",
                "barnacle",
                "parrot",
                "jellyfish",
                "cabin boy",
            ],
            verbs: &[],
            gerunds: &["scrubbing", "arguing with", "teaching git to", "sharing a bunk with"],
            past_verbs: &[],
        },
    },
    ThemeDef {
        name: "ugly-code",
        insults: &[
            "Your code is as ugly as a %s!",
            "Your functions smell worse than a %s!",
            "Your variables are messier than a %s!",
            "I've seen cleaner logic in a %s!",
        ],
        comebacks: &[
            ("Yet yours couldn't even pass a %s.", Noun),
            ("Funny, your %s said the same about your code.", Noun),
            ("At least my code doesn't crash like your %s.", Noun),
            ("Still prettier than your %s.", Noun),
            ("You %s a %s once and never recovered.", PastVerbNoun),
        ],
        words: WordLists {
            nouns: &[
                "merge conflict",
                "core dump",
                "stack trace",
                "spaghetti monster",
                "legacy codebase",
                "regex pattern",
                "minified bundle",
                "memory dump",
                "corrupted database",
            ],
            verbs: &[],
            gerunds: &[],
            past_verbs: &["debugged", "refactored", "inherited", "reviewed", "deployed"],
        },
    },
    ThemeDef {
        name: "debugging",
        insults: &[
            "You debug slower than a %s!",
            "Your debugging skills are worse than a %s!",
            "Even a %s finds bugs faster than you!",
            "A %s could step through code better!",
        ],
        comebacks: &[
            ("At least I know when to %s.", Verb),
            ("I'd rather %s than watch you try.", Verb),
            ("First you'd better learn to %s.", Verb),
            ("Too bad you can't even %s.", Verb),
            ("Even a %s knows how to %s.", NounVerb),
        ],
        words: WordLists {
            nouns: &[
                "sloth",
                "snail on vacation",
                "blindfolded parrot",
                "rubber duck with amnesia",
                "sleepy lighthouse keeper",
                "potato",
            ],
            verbs: &[
                "break out of an infinite loop",
                "exit vim",
                "read a stack trace",
                "use a debugger",
                "check the logs",
                "write a unit test",
                "set a breakpoint",
                "read the docs",
            ],
            gerunds: &[],
            past_verbs: &[],
        },
    },
    ThemeDef {
        name: "deployment",
        insults: &[
            "Your deploys are as reliable as a %s!",
            "Your CI pipeline is held together with a %s!",
            "Your production server runs on a %s!",
            "Your uptime is shorter than a %s!",
        ],
        comebacks: &[
            ("Your last deploy broke more things than a %s.", Noun),
            ("At least my %s doesn't page me at 3am.", Noun),
            ("Better than your %s that never even builds.", Noun),
            ("Says the one whose %s is always on fire.", Noun),
            ("Go %s your %s before it pages me again.", VerbNoun),
        ],
        words: WordLists {
            nouns: &[
                "chocolate teapot",
                "mass of duct tape",
                "house of cards",
                "rubber band and a prayer",
                "coffee-stained napkin sketch",
                "server held together with hope",
                "cron job from 2003",
            ],
            verbs: &["reboot", "apologize to", "unplug", "rewrite", "roll back"],
            gerunds: &[],
            past_verbs: &[],
        },
    },
    ThemeDef {
        name: "git",
        insults: &[
            "Your git history reads like '%s'!",
            "Your commit messages are worse than '%s'!",
            "Your branches are more tangled than '%s'!",
            "Your pull requests look like '%s'!",
        ],
        comebacks: &[
            ("Your last commit message was just '%s'.", Noun),
            ("At least I don't %s on every push.", Verb),
            ("Better than your strategy of '%s'.", Noun),
            ("Says the one who thinks '%s' is version control.", Noun),
            ("Your '%s' commit is why I spend Fridays %s.", NounGerund),
        ],
        words: WordLists {
            nouns: &[
                "fix stuff",
                "WIP WIP WIP final FINAL",
                "undo undo undo",
                "asdfasdf",
                "final_v2_really_final",
                "rebase and pray",
                "copy the whole folder",
            ],
            verbs: &[
                "force push to main",
                "commit directly to production",
                "rewrite history",
                "merge without reading",
            ],
            gerunds: &["rebasing", "bisecting", "crying into the reflog", "resolving conflicts"],
            past_verbs: &[],
        },
    },
    ThemeDef {
        name: "error-handling",
        insults: &[
            "You handle errors like a %s handles a sword!",
            "Your exception handling is as graceful as a %s!",
            "You catch bugs like a %s catches cannonballs!",
            "Your error messages are as helpful as a %s!",
        ],
        comebacks: &[
            ("Your approach is even worse: you %s.", Verb),
            ("At least I don't %s like you do.", Verb),
            ("Better than your technique: %s like a %s.", GerundNoun),
            ("Says the one whose strategy is to %s.", Verb),
        ],
        words: WordLists {
            nouns: &[
                "seagull",
                "blindfolded cabin boy",
                "wet paper bag",
                "startled octopus",
                "fog horn",
            ],
            verbs: &[
                "catch and ignore everything",
                "blame the user",
                "restart and hope for the best",
                "comment out the failing test",
                "wrap it all in a try-catch and move on",
                "print 'this should never happen'",
                "ship it anyway",
            ],
            gerunds: &[
                "swallowing every exception",
                "blaming the user",
                "restarting and hoping",
                "logging nothing",
            ],
            past_verbs: &[],
        },
    },
    ThemeDef {
        name: "architecture",
        insults: &[
            "Your architecture looks like it was designed by a %s!",
            "I've seen better design patterns in a %s!",
            "Your system design reminds me of a %s!",
            "A %s has more structure than your codebase!",
        ],
        comebacks: &[
            ("Your architecture collapses faster than a %s.", Noun),
            ("At least my code doesn't look like a %s.", Noun),
            ("Better than your %s of a system.", Noun),
            ("Says the one building on a %s.", Noun),
            ("Your %s is still %s in production.", NounGerund),
        ],
        words: WordLists {
            nouns: &[
                "shipwreck",
                "sandcastle at high tide",
                "house built on quicksand",
                "tower of Babel",
                "Jenga tower in an earthquake",
                "soggy cardboard box",
                "pirate ship full of holes",
                "haunted spaghetti factory",
            ],
            verbs: &[],
            gerunds: &["sinking", "leaking", "collapsing", "smouldering"],
            past_verbs: &[],
        },
    },
    ThemeDef {
        name: "testing",
        insults: &[
            "Your tests cover less than a %s!",
            "Your test suite is as thorough as a %s!",
            "I've seen more coverage from a %s!",
            "Your QA process is just a %s!",
        ],
        comebacks: &[
            ("You don't even know what a %s is.", Noun),
            ("At least I have tests. You just %s.", Verb),
            ("Better than your approach of %s with a %s.", GerundNoun),
            ("Says the one who thinks %s counts as QA.", Gerund),
        ],
        words: WordLists {
            nouns: &[
                "blindfolded monkey poking a keyboard",
                "fortune cookie",
                "coin toss",
                "sleepy intern",
                "single console.log",
            ],
            verbs: &[
                "cross your fingers and deploy",
                "test in production",
                "ask the intern if it works",
                "refresh the page once",
            ],
            gerunds: &[
                "testing in production",
                "deploying on Fridays",
                "skipping code review",
                "mocking everything",
            ],
            past_verbs: &[],
        },
    },
];
