use crate::{Alias, IllustrationAsset};

// Matched top to bottom, the first keyword found in a name wins.
pub(crate) const ILLUSTRATION_ALIASES: [Alias; 34] = [
    Alias::new("quad", "quad-sets"),
    Alias::new("heel slide", "heel-slides"),
    Alias::new("straight leg", "straight-leg-raises"),
    Alias::new("leg raise", "straight-leg-raises"),
    Alias::new("ankle pump", "ankle-pumps"),
    Alias::new("ankle alphabet", "ankle-alphabet"),
    Alias::new("calf raise", "calf-raises"),
    Alias::new("toe raise", "calf-raises"),
    Alias::new("balance", "balance-practice"),
    Alias::new("single leg", "balance-practice"),
    Alias::new("towel scrunch", "towel-scrunches"),
    Alias::new("chair squat", "chair-squats"),
    Alias::new("sit to stand", "chair-squats"),
    Alias::new("pelvic tilt", "pelvic-tilts"),
    Alias::new("knee to chest", "knee-to-chest-stretch"),
    Alias::new("cat cow", "cat-cow-stretch"),
    Alias::new("cat-cow", "cat-cow-stretch"),
    Alias::new("bird dog", "bird-dog"),
    Alias::new("bird-dog", "bird-dog"),
    Alias::new("pendulum", "pendulum-swings"),
    Alias::new("scapular squeeze", "scapular-squeezes"),
    Alias::new("shoulder blade", "scapular-squeezes"),
    Alias::new("wall slide", "wall-slides"),
    Alias::new("external rotation", "passive-external-rotation"),
    Alias::new("deep breath", "deep-breathing"),
    Alias::new("breathing", "deep-breathing"),
    Alias::new("diaphragmatic", "deep-breathing"),
    Alias::new("stretch", "stretching-routine"),
    Alias::new("morning walk", "morning-walk"),
    Alias::new("walk", "morning-walk"),
    Alias::new("walking", "morning-walk"),
    Alias::new("hand exercise", "hand-exercises"),
    Alias::new("finger", "hand-exercises"),
    Alias::new("grip", "hand-exercises"),
];

pub(crate) const ILLUSTRATIONS: [IllustrationAsset; 22] = [
    IllustrationAsset {
        id: "quad-sets",
        caption: "Press back of knee firmly into mat • Hold 5 seconds • Relax • Repeat",
        markup: include_str!("../../assets/illustrations/quad-sets.svg"),
    },
    IllustrationAsset {
        id: "heel-slides",
        caption: "Slowly slide heel toward buttock • Return to start • Repeat 10-15 times",
        markup: include_str!("../../assets/illustrations/heel-slides.svg"),
    },
    IllustrationAsset {
        id: "straight-leg-raises",
        caption: "Tighten thigh • Lift leg 6-8 inches • Hold 3-5 seconds • Lower slowly",
        markup: include_str!("../../assets/illustrations/straight-leg-raises.svg"),
    },
    IllustrationAsset {
        id: "ankle-pumps",
        caption: "Pump foot up and down • Move only at ankle • 10-20 repetitions per set",
        markup: include_str!("../../assets/illustrations/ankle-pumps.svg"),
    },
    IllustrationAsset {
        id: "ankle-alphabet",
        caption: "Trace letters A through Z with your big toe • Move only at ankle joint",
        markup: include_str!("../../assets/illustrations/ankle-alphabet.svg"),
    },
    IllustrationAsset {
        id: "calf-raises",
        caption: "Rise onto toes slowly • Hold 2-3 seconds • Lower with control • 10-15 reps",
        markup: include_str!("../../assets/illustrations/calf-raises.svg"),
    },
    IllustrationAsset {
        id: "balance-practice",
        caption: "Stand on one leg • Hold 30 seconds • Keep chair nearby for safety • Switch legs",
        markup: include_str!("../../assets/illustrations/balance-practice.svg"),
    },
    IllustrationAsset {
        id: "chair-squats",
        caption: "Sit to stand slowly • Use arms for balance if needed • 10 repetitions",
        markup: include_str!("../../assets/illustrations/chair-squats.svg"),
    },
    IllustrationAsset {
        id: "pelvic-tilts",
        caption: "Flatten lower back against mat • Engage abs • Hold 5 seconds • Relax",
        markup: include_str!("../../assets/illustrations/pelvic-tilts.svg"),
    },
    IllustrationAsset {
        id: "knee-to-chest-stretch",
        caption: "Gently pull knee toward chest • Hold 30 seconds • Feel stretch in lower back • Switch legs",
        markup: include_str!("../../assets/illustrations/knee-to-chest-stretch.svg"),
    },
    IllustrationAsset {
        id: "cat-cow-stretch",
        caption: "On hands and knees • Alternate arching up (cat) and down (cow) • Breathe slowly",
        markup: include_str!("../../assets/illustrations/cat-cow-stretch.svg"),
    },
    IllustrationAsset {
        id: "bird-dog",
        caption: "Extend opposite arm and leg • Keep back flat • Hold 5 seconds • Switch sides",
        markup: include_str!("../../assets/illustrations/bird-dog.svg"),
    },
    IllustrationAsset {
        id: "pendulum-swings",
        caption: "Lean on table • Let arm hang • Small circles • 1-2 minutes each direction",
        markup: include_str!("../../assets/illustrations/pendulum-swings.svg"),
    },
    IllustrationAsset {
        id: "scapular-squeezes",
        caption: "Squeeze shoulder blades together • Hold 5 seconds • Relax • 10-15 repetitions",
        markup: include_str!("../../assets/illustrations/scapular-squeezes.svg"),
    },
    IllustrationAsset {
        id: "wall-slides",
        caption: "Back against wall • Slide arms up and down • Keep contact with wall • 10-15 reps",
        markup: include_str!("../../assets/illustrations/wall-slides.svg"),
    },
    IllustrationAsset {
        id: "passive-external-rotation",
        caption: "Keep elbow at side • Use other hand to assist • Rotate forearm outward slowly",
        markup: include_str!("../../assets/illustrations/passive-external-rotation.svg"),
    },
    IllustrationAsset {
        id: "deep-breathing",
        caption: "Breathe in through nose (4 sec) • Exhale slowly through mouth (6 sec) • Repeat 5-10 times",
        markup: include_str!("../../assets/illustrations/deep-breathing.svg"),
    },
    IllustrationAsset {
        id: "stretching-routine",
        caption: "Reach tall through fingertips • Hold each stretch 15-30 seconds • Breathe deeply",
        markup: include_str!("../../assets/illustrations/stretching-routine.svg"),
    },
    IllustrationAsset {
        id: "morning-walk",
        caption: "Walk at comfortable pace • Stay relaxed • Swing arms naturally • Breathe easily",
        markup: include_str!("../../assets/illustrations/morning-walk.svg"),
    },
    IllustrationAsset {
        id: "hand-exercises",
        caption: "Spread fingers wide • Make tight fist • Alternate slowly • 10-15 repetitions",
        markup: include_str!("../../assets/illustrations/hand-exercises.svg"),
    },
    IllustrationAsset {
        id: "towel-scrunches",
        caption: "Place towel under foot • Scrunch towel with toes • Repeat 15-20 times",
        markup: include_str!("../../assets/illustrations/towel-scrunches.svg"),
    },
    IllustrationAsset {
        id: "default",
        caption: "Follow your physical therapist's instructions • Move slowly and carefully • Stop if you feel pain",
        markup: include_str!("../../assets/illustrations/default.svg"),
    },
];
