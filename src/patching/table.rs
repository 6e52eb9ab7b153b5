//! Known malformed lines of the corpus.
//!
//! Entries are keyed by the last three path components of the file,
//! the 0-based line index and the exact trimmed content of the line.
//! A `None` replacement deletes the line.

pub(super) struct StaticPatch {
    pub file: &'static str,
    pub line: usize,
    pub text: &'static str,
    pub replacement: Option<&'static str>,
}

pub(super) static PATCHES: &[StaticPatch] = &[
    StaticPatch {
        file: "test/5triples/MeanOfTransportation.xml",
        line: 137,
        text: "<text>AIDAstella was built by Meyer Werft and is operated by AIDA Cruise Line. The AIDAstella has a beam of 32.2 m, is 253260.0 millimetres in length and has a beam of 32.2 m.</text>",
        replacement: Some("<text>AIDAstella was built by Meyer Werft. The AIDAstella has a beam of 32.2 m, is 253260.0 millimetres in length and has a beam of 32.2 m.</text>"),
    },
    StaticPatch {
        file: "test/5triples/MeanOfTransportation.xml",
        line: 138,
        text: "<template>AGENT-1 was built by PATIENT-4 and is operated by BRIDGE-1 . AGENT-1 has a beam of PATIENT-2 , is PATIENT-5 in length and has a beam of PATIENT-2 .</template>",
        replacement: Some("<template>AGENT-1 was built by PATIENT-4 . AGENT-1 has a beam of PATIENT-2 , is PATIENT-5 in length and has a beam of PATIENT-2 .</template>"),
    },
    StaticPatch {
        file: "test/5triples/MeanOfTransportation.xml",
        line: 161,
        text: "<text>The AIDAstella was built by Meyer Werft and operated by the AIDA Cruise Line. It is 253260.0 millimetres long with a beam of 32.2 metres and a top speed of 38.892 km/h.</text>",
        replacement: Some("<text>The AIDAstella was built by Meyer Werft. It is 253260.0 millimetres long with a beam of 32.2 metres and a top speed of 38.892 km/h.</text>"),
    },
    StaticPatch {
        file: "test/5triples/MeanOfTransportation.xml",
        line: 162,
        text: "<template>AGENT-1 was built by PATIENT-4 and operated by BRIDGE-1 . AGENT-1 is PATIENT-5 long with a beam of PATIENT-2 and a top speed of PATIENT-3 .</template>",
        replacement: Some("<template>AGENT-1 was built by PATIENT-4 . AGENT-1 is PATIENT-5 long with a beam of PATIENT-2 and a top speed of PATIENT-3 .</template>"),
    },
    StaticPatch {
        file: "test/4triples/CelestialBody.xml",
        line: 34,
        text: "<text>The epoch of (19255) 1994 VK8 is on 31 December 2006. It has an orbital period of 8788850000.0, a periapsis of 6155910000000.0 and an apoapsis of 6603633000.0 km.</text>",
        replacement: Some("<text>The epoch of (19255) 1994 VK8 is on 31 December 2006. It has an orbital period of 8788850000.0 and a periapsis of 6155910000000.0 .</text>"),
    },
    StaticPatch {
        file: "test/4triples/CelestialBody.xml",
        line: 35,
        text: "<template>The epoch of AGENT-1 is on PATIENT-1 . AGENT-1 has an orbital period of PATIENT-2 , a periapsis of PATIENT-3 and an apoapsis of PATIENT-5 .</template>",
        replacement: Some("<template>The epoch of AGENT-1 is on PATIENT-1 . AGENT-1 has an orbital period of PATIENT-2 and a periapsis of PATIENT-3 .</template>"),
    },
    StaticPatch {
        file: "test/4triples/MeanOfTransportation.xml",
        line: 293,
        text: "<text>Costa Crociere is the owner of the AIDAstella which is 25326.0 millimetres long. It was built by Meyer Werft and operated by AIDA Cruise Line.</text>",
        replacement: Some("<text>Costa Crociere is the owner of the AIDAstella which is 25326.0 millimetres long. It was built by Meyer Werft .</text>"),
    },
    StaticPatch {
        file: "test/4triples/MeanOfTransportation.xml",
        line: 294,
        text: "<template>PATIENT-4 is the owner of AGENT-1 which is PATIENT-2 long . AGENT-1 was built by PATIENT-3 and operated by BRIDGE-1 .</template>",
        replacement: Some("<template>PATIENT-4 is the owner of AGENT-1 which is PATIENT-2 long . AGENT-1 was built by PATIENT-3 .</template>"),
    },
    StaticPatch {
        file: "test/4triples/Monument.xml",
        line: 381,
        text: "<text>Ahmet Davutoglu is the leader of Turkey where the capital is Ankara. The Ataturk monument (Izmir) which is made of bronze is located within the country.</text>",
        replacement: Some("<text>Ahmet Davutoglu is the leader of Turkey where the capital is Ankara. The Ataturk monument (Izmir) is located within the country.</text>"),
    },
    StaticPatch {
        file: "test/4triples/Monument.xml",
        line: 382,
        text: "<template>PATIENT-1 is the leader of BRIDGE-1 where the capital is PATIENT-2 . AGENT-1 which is made of PATIENT-4 is located within BRIDGE-1 .</template>",
        replacement: Some("<template>PATIENT-1 is the leader of BRIDGE-1 where the capital is PATIENT-2 . AGENT-1 is located within BRIDGE-1 .</template>"),
    },
];
