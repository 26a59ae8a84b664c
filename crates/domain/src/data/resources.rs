use crate::{Alias, Difficulty, ExerciseResource, Image, Media, Video, VideoProvider};

// Matched top to bottom, the first keyword found in a name wins. Put specific
// keywords above the generic ones they contain.
pub(crate) const RESOURCE_ALIASES: [Alias; 116] = [
    Alias::new("wrist range", "wrist-range-of-motion"),
    Alias::new("wrist rom", "wrist-range-of-motion"),
    Alias::new("wrist flex", "wrist-flexion-stretch"),
    Alias::new("wrist ext", "wrist-extension-stretch"),
    Alias::new("finger spread", "finger-spreads"),
    Alias::new("finger", "finger-spreads"),
    Alias::new("tendon glide", "finger-tendon-glides"),
    Alias::new("forearm", "forearm-rotation"),
    Alias::new("supination", "forearm-rotation"),
    Alias::new("pronation", "forearm-rotation"),
    Alias::new("grip", "grip-strengthening"),
    Alias::new("squeeze", "grip-strengthening"),
    Alias::new("thumb", "thumb-opposition"),
    Alias::new("nerve glide", "nerve-glides-median"),
    Alias::new("median nerve", "nerve-glides-median"),
    Alias::new("elbow flex", "elbow-flexion-extension"),
    Alias::new("tennis elbow", "tennis-elbow-stretch"),
    Alias::new("lateral epicondyl", "tennis-elbow-stretch"),
    Alias::new("golfer", "golfers-elbow-stretch"),
    Alias::new("medial epicondyl", "golfers-elbow-stretch"),
    Alias::new("eccentric", "eccentric-wrist-extension"),
    Alias::new("pendulum", "pendulum-swings"),
    Alias::new("codman", "pendulum-swings"),
    Alias::new("shoulder flex", "shoulder-flexion"),
    Alias::new("arm raise", "shoulder-flexion"),
    Alias::new("shoulder abduct", "shoulder-abduction"),
    Alias::new("side raise", "shoulder-abduction"),
    Alias::new("external rotation", "external-rotation-sidelying"),
    Alias::new("internal rotation", "internal-rotation-stretch"),
    Alias::new("sleeper", "internal-rotation-stretch"),
    Alias::new("scapular", "scapular-squeezes"),
    Alias::new("shoulder blade", "scapular-squeezes"),
    Alias::new("wall slide", "wall-slides"),
    Alias::new("cross body", "cross-body-stretch"),
    Alias::new("doorway", "doorway-chest-stretch"),
    Alias::new("pec stretch", "doorway-chest-stretch"),
    Alias::new("isometric shoulder", "shoulder-isometric-exercises"),
    Alias::new("neck range", "neck-range-of-motion"),
    Alias::new("neck rom", "neck-range-of-motion"),
    Alias::new("chin tuck", "chin-tucks"),
    Alias::new("cervical retract", "chin-tucks"),
    Alias::new("levator", "levator-scapulae-stretch"),
    Alias::new("upper trap", "upper-trap-stretch"),
    Alias::new("trapezius", "upper-trap-stretch"),
    Alias::new("isometric neck", "isometric-neck-exercises"),
    Alias::new("pelvic tilt", "pelvic-tilts"),
    Alias::new("knee to chest", "knee-to-chest-stretch"),
    Alias::new("double knee", "double-knee-to-chest"),
    Alias::new("cat cow", "cat-cow-stretch"),
    Alias::new("cat-cow", "cat-cow-stretch"),
    Alias::new("bird dog", "bird-dog"),
    Alias::new("bird-dog", "bird-dog"),
    Alias::new("bridge", "bridges"),
    Alias::new("glute bridge", "bridges"),
    Alias::new("press up", "prone-press-up"),
    Alias::new("mckenzie", "prone-press-up"),
    Alias::new("trunk rotation", "lumbar-rotation-stretch"),
    Alias::new("lumbar rotation", "lumbar-rotation-stretch"),
    Alias::new("dead bug", "dead-bug"),
    Alias::new("child", "child-pose"),
    Alias::new("childs", "child-pose"),
    Alias::new("hip flexor", "hip-flexor-stretch"),
    Alias::new("kneeling lunge", "hip-flexor-stretch"),
    Alias::new("piriformis", "piriformis-stretch"),
    Alias::new("figure 4", "piriformis-stretch"),
    Alias::new("clamshell", "clamshells"),
    Alias::new("clam", "clamshells"),
    Alias::new("hip abduct", "hip-abduction-sidelying"),
    Alias::new("side leg", "hip-abduction-sidelying"),
    Alias::new("hip internal", "hip-internal-rotation"),
    Alias::new("hip external", "hip-external-rotation"),
    Alias::new("standing hip", "standing-hip-flexion"),
    Alias::new("quad set", "quad-sets"),
    Alias::new("straight leg raise", "straight-leg-raises"),
    Alias::new("slr", "straight-leg-raises"),
    Alias::new("heel slide", "heel-slides"),
    Alias::new("terminal knee", "terminal-knee-extension"),
    Alias::new("tke", "terminal-knee-extension"),
    Alias::new("hamstring curl", "hamstring-curls-standing"),
    Alias::new("hamstring stretch", "hamstring-stretch-supine"),
    Alias::new("wall sit", "wall-sits"),
    Alias::new("step up", "step-ups"),
    Alias::new("ankle pump", "ankle-pumps"),
    Alias::new("ankle circle", "ankle-circles"),
    Alias::new("calf raise", "calf-raises"),
    Alias::new("heel raise", "calf-raises"),
    Alias::new("calf stretch", "calf-stretch-wall"),
    Alias::new("towel scrunch", "towel-scrunches"),
    Alias::new("toe curl", "towel-scrunches"),
    Alias::new("inversion", "ankle-inversion-eversion"),
    Alias::new("eversion", "ankle-inversion-eversion"),
    Alias::new("single leg balance", "balance-single-leg"),
    Alias::new("one leg balance", "balance-single-leg"),
    Alias::new("plantar fascia", "plantar-fascia-stretch"),
    Alias::new("arch stretch", "plantar-fascia-stretch"),
    Alias::new("walk", "walking"),
    Alias::new("walking", "walking"),
    Alias::new("march", "stationary-marching"),
    Alias::new("marching", "stationary-marching"),
    Alias::new("squat", "bodyweight-squats"),
    Alias::new("body weight squat", "bodyweight-squats"),
    Alias::new("chair squat", "chair-squats"),
    Alias::new("sit to stand", "chair-squats"),
    Alias::new("sit-to-stand", "chair-squats"),
    Alias::new("lunge", "lunges"),
    Alias::new("morning stretch", "morning-stretch"),
    Alias::new("stretch routine", "gentle-stretching"),
    Alias::new("gentle stretch", "gentle-stretching"),
    Alias::new("deep breath", "deep-breathing"),
    Alias::new("diaphragm", "deep-breathing"),
    Alias::new("belly breath", "deep-breathing"),
    Alias::new("pursed lip", "pursed-lip-breathing"),
    Alias::new("balance", "balance-practice"),
    Alias::new("tandem", "tandem-stance"),
    Alias::new("heel toe", "heel-toe-walking"),
    Alias::new("tightrope", "heel-toe-walking"),
];

pub(crate) const RESOURCES: [ExerciseResource; 74] = [
    ExerciseResource {
        id: "wrist-range-of-motion",
        name: "Wrist Range of Motion",
        category: "wrist-hand",
        body_part: "wrist",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/5473182/pexels-photo-5473182.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Wrist flexion and extension exercise demonstration",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "mQLFKu0mXIo",
                title: "Wrist Stretches & Range of Motion Exercises",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Extend your arm in front of you with palm down",
            "Gently bend wrist up (extension) and hold 5 seconds",
            "Gently bend wrist down (flexion) and hold 5 seconds",
            "Move wrist side to side slowly (radial/ulnar deviation)",
            "Repeat 10 times in each direction",
        ],
        conditions: &["wrist-sprain", "carpal-tunnel", "wrist-tendonitis", "repetitive-strain"],
    },
    ExerciseResource {
        id: "wrist-flexion-stretch",
        name: "Wrist Flexion Stretch",
        category: "wrist-hand",
        body_part: "wrist",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/7298877/pexels-photo-7298877.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person stretching wrist in flexion position",
                credit: "Pexels - MART PRODUCTION",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "mQLFKu0mXIo",
                title: "Wrist Flexion Stretches",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Extend arm straight in front, palm facing up",
            "Use other hand to gently press fingers toward floor",
            "Feel stretch on top of forearm",
            "Hold for 20-30 seconds",
            "Repeat 3 times each wrist",
        ],
        conditions: &["carpal-tunnel", "wrist-tendonitis", "tennis-elbow"],
    },
    ExerciseResource {
        id: "wrist-extension-stretch",
        name: "Wrist Extension Stretch",
        category: "wrist-hand",
        body_part: "wrist",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/7298877/pexels-photo-7298877.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person stretching wrist in extension position",
                credit: "Pexels - MART PRODUCTION",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "mQLFKu0mXIo",
                title: "Wrist Extension Stretches",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Extend arm straight in front, palm facing down",
            "Use other hand to gently press fingers toward body",
            "Feel stretch on inner forearm",
            "Hold for 20-30 seconds",
            "Repeat 3 times each wrist",
        ],
        conditions: &["carpal-tunnel", "wrist-tendonitis", "golfers-elbow"],
    },
    ExerciseResource {
        id: "finger-spreads",
        name: "Finger Spreads",
        category: "wrist-hand",
        body_part: "hand",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/7176319/pexels-photo-7176319.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Hand with fingers spread wide apart",
                credit: "Pexels - cottonbro studio",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "EiRC80FLbsQ",
                title: "Hand and Finger Exercises",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Start with your hand relaxed",
            "Spread all fingers as wide apart as possible",
            "Hold for 3-5 seconds",
            "Bring fingers back together",
            "Make a gentle fist, then spread again",
            "Repeat 10-15 times",
        ],
        conditions: &[
            "wrist-sprain",
            "thumb-sprain",
            "carpal-tunnel",
            "trigger-finger",
            "arthritis",
        ],
    },
    ExerciseResource {
        id: "finger-tendon-glides",
        name: "Finger Tendon Glides",
        category: "wrist-hand",
        body_part: "hand",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/7176319/pexels-photo-7176319.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Hand performing tendon gliding exercises",
                credit: "Pexels - cottonbro studio",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "EiRC80FLbsQ",
                title: "Tendon Gliding Exercises",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Start with fingers straight (table top position)",
            "Bend at knuckles only - keep fingers straight (hook fist)",
            "Make a full fist",
            "Open to straight position",
            "Bend at first finger joints (tabletop)",
            "Move through each position slowly, 10 times",
        ],
        conditions: &["carpal-tunnel", "trigger-finger", "finger-fracture", "hand-surgery"],
    },
    ExerciseResource {
        id: "forearm-rotation",
        name: "Forearm Rotation (Supination/Pronation)",
        category: "wrist-hand",
        body_part: "forearm",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4498574/pexels-photo-4498574.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person rotating forearm palm up and palm down",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "BHxKk20jfhM",
                title: "Forearm Supination and Pronation",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Sit with elbow bent at 90 degrees, close to your side",
            "Start with palm facing down (pronation)",
            "Slowly rotate forearm so palm faces up (supination)",
            "Rotate back to palm down position",
            "Keep elbow stationary - only forearm moves",
            "Repeat 10-15 times",
        ],
        conditions: &[
            "wrist-sprain",
            "elbow-sprain",
            "tennis-elbow",
            "golfers-elbow",
            "forearm-fracture",
        ],
    },
    ExerciseResource {
        id: "grip-strengthening",
        name: "Grip Strengthening",
        category: "wrist-hand",
        body_part: "hand",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4498362/pexels-photo-4498362.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Hand squeezing therapy ball for grip strength",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "TSuG-xfwCU4",
                title: "Hand Grip Strengthening Exercises",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Use a soft stress ball or rolled towel",
            "Squeeze gently - no pain should be felt",
            "Hold squeeze for 5 seconds",
            "Release slowly",
            "Repeat 10 times",
            "Only do this exercise when your wrist is pain-free",
        ],
        conditions: &[
            "wrist-sprain",
            "thumb-sprain",
            "carpal-tunnel",
            "arthritis",
            "stroke-recovery",
        ],
    },
    ExerciseResource {
        id: "thumb-opposition",
        name: "Thumb Opposition",
        category: "wrist-hand",
        body_part: "hand",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/7176319/pexels-photo-7176319.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Thumb touching each fingertip in sequence",
                credit: "Pexels - cottonbro studio",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "EiRC80FLbsQ",
                title: "Thumb Opposition Exercise",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Start with hand open, fingers extended",
            "Touch thumb to tip of index finger, making an \"O\"",
            "Open hand back to starting position",
            "Touch thumb to middle finger tip",
            "Continue to ring finger, then pinky",
            "Repeat the full sequence 10 times",
        ],
        conditions: &["thumb-sprain", "carpal-tunnel", "arthritis", "stroke-recovery"],
    },
    ExerciseResource {
        id: "nerve-glides-median",
        name: "Median Nerve Glides",
        category: "wrist-hand",
        body_part: "arm",
        difficulty: Difficulty::Intermediate,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/7298877/pexels-photo-7298877.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person performing median nerve glide stretch",
                credit: "Pexels - MART PRODUCTION",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "pAjjwVKY5d4",
                title: "Median Nerve Glides for Carpal Tunnel",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Start with elbow bent, wrist flexed, fingers in fist",
            "Straighten elbow while keeping wrist flexed",
            "Extend wrist back while straightening fingers",
            "Turn head away from extended arm",
            "Move slowly - should feel gentle stretch, no pain",
            "Repeat 10-15 times",
        ],
        conditions: &["carpal-tunnel", "peripheral-neuropathy", "thoracic-outlet"],
    },
    ExerciseResource {
        id: "elbow-flexion-extension",
        name: "Elbow Flexion and Extension",
        category: "elbow",
        body_part: "elbow",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4498574/pexels-photo-4498574.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person bending and straightening elbow",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "TcYjBwKOvXM",
                title: "Elbow Range of Motion Exercises",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Start with arm at side, palm facing forward",
            "Slowly bend elbow, bringing hand toward shoulder",
            "Hold for 2 seconds at the top",
            "Slowly straighten elbow completely",
            "Keep upper arm still",
            "Repeat 10-15 times",
        ],
        conditions: &[
            "elbow-sprain",
            "tennis-elbow",
            "golfers-elbow",
            "elbow-fracture",
            "elbow-surgery",
        ],
    },
    ExerciseResource {
        id: "tennis-elbow-stretch",
        name: "Tennis Elbow Stretch",
        category: "elbow",
        body_part: "elbow",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/7298877/pexels-photo-7298877.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person stretching forearm extensors for tennis elbow",
                credit: "Pexels - MART PRODUCTION",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "we4UoiKG3Co",
                title: "Tennis Elbow Stretches",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Extend arm straight in front, palm down",
            "Make a fist",
            "Bend wrist down toward floor",
            "Use other hand to gently press down further",
            "Feel stretch along outer forearm",
            "Hold 30 seconds, repeat 3 times",
        ],
        conditions: &["tennis-elbow", "lateral-epicondylitis", "forearm-strain"],
    },
    ExerciseResource {
        id: "golfers-elbow-stretch",
        name: "Golfer's Elbow Stretch",
        category: "elbow",
        body_part: "elbow",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/7298877/pexels-photo-7298877.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person stretching forearm flexors for golfer elbow",
                credit: "Pexels - MART PRODUCTION",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "CLjtSyuE11I",
                title: "Golfers Elbow Stretches",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Extend arm straight in front, palm up",
            "Straighten fingers",
            "Bend wrist back, fingers pointing down",
            "Use other hand to gently pull fingers back further",
            "Feel stretch along inner forearm",
            "Hold 30 seconds, repeat 3 times",
        ],
        conditions: &["golfers-elbow", "medial-epicondylitis", "forearm-strain"],
    },
    ExerciseResource {
        id: "eccentric-wrist-extension",
        name: "Eccentric Wrist Extension",
        category: "elbow",
        body_part: "forearm",
        difficulty: Difficulty::Intermediate,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4498574/pexels-photo-4498574.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person performing eccentric wrist curl with light weight",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "we4UoiKG3Co",
                title: "Eccentric Wrist Exercises for Tennis Elbow",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Rest forearm on table, wrist over edge, palm down",
            "Hold light weight (1-2 lbs or can of soup)",
            "Use other hand to help lift wrist up",
            "Slowly lower wrist down (eccentric phase) over 3 seconds",
            "Focus on the slow lowering motion",
            "Repeat 10-15 times, 3 sets",
        ],
        conditions: &["tennis-elbow", "lateral-epicondylitis", "wrist-tendonitis"],
    },
    ExerciseResource {
        id: "pendulum-swings",
        name: "Pendulum Swings (Codman Exercises)",
        category: "shoulder",
        body_part: "shoulder",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4498362/pexels-photo-4498362.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing pendulum arm swings leaning on table",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "W5CVconTqHE",
                title: "Pendulum Exercises for Shoulder",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lean forward, support yourself on a table with unaffected arm",
            "Let affected arm hang down relaxed",
            "Gently swing arm in small circles (clockwise)",
            "Swing in opposite direction (counterclockwise)",
            "Swing forward and back, then side to side",
            "Let momentum do the work - keep arm relaxed",
            "Continue 1-2 minutes each direction",
        ],
        conditions: &[
            "shoulder-impingement",
            "rotator-cuff",
            "frozen-shoulder",
            "shoulder-surgery",
            "shoulder-sprain",
        ],
    },
    ExerciseResource {
        id: "shoulder-flexion",
        name: "Shoulder Flexion (Arm Raise)",
        category: "shoulder",
        body_part: "shoulder",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3822864/pexels-photo-3822864.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person raising arms overhead for shoulder flexion",
                credit: "Pexels - Andrea Piacquadio",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "Cp3eFEAYwAM",
                title: "Shoulder Flexion Exercises",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand or sit with arm at side, thumb up",
            "Slowly raise arm forward and up toward ceiling",
            "Go as high as comfortable without pain",
            "Hold 2 seconds at the top",
            "Slowly lower back down",
            "Repeat 10-15 times",
        ],
        conditions: &[
            "shoulder-impingement",
            "rotator-cuff",
            "frozen-shoulder",
            "shoulder-surgery",
        ],
    },
    ExerciseResource {
        id: "shoulder-abduction",
        name: "Shoulder Abduction (Side Raise)",
        category: "shoulder",
        body_part: "shoulder",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3822864/pexels-photo-3822864.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person raising arms out to sides for shoulder abduction",
                credit: "Pexels - Andrea Piacquadio",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "MSTrPJV5UjE",
                title: "Shoulder Abduction Exercises",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand with arm at side, palm facing body",
            "Slowly raise arm out to the side",
            "Keep elbow straight, thumb pointing up",
            "Raise to shoulder level or as high as comfortable",
            "Hold 2 seconds",
            "Slowly lower back down",
            "Repeat 10-15 times",
        ],
        conditions: &["shoulder-impingement", "rotator-cuff", "frozen-shoulder"],
    },
    ExerciseResource {
        id: "external-rotation-sidelying",
        name: "External Rotation (Side-Lying)",
        category: "shoulder",
        body_part: "shoulder",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person lying on side performing shoulder external rotation",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "QstnGgJ0XnQ",
                title: "Shoulder External Rotation Exercises",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on your unaffected side",
            "Hold light weight in top hand",
            "Bend elbow 90 degrees, rest it against your side",
            "Slowly rotate forearm upward toward ceiling",
            "Keep elbow pressed against your side",
            "Lower slowly back down",
            "Repeat 10-15 times",
        ],
        conditions: &["rotator-cuff", "shoulder-impingement", "shoulder-instability"],
    },
    ExerciseResource {
        id: "internal-rotation-stretch",
        name: "Internal Rotation Stretch (Sleeper Stretch)",
        category: "shoulder",
        body_part: "shoulder",
        difficulty: Difficulty::Intermediate,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing sleeper stretch for shoulder internal rotation",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "ehyJAT4zvKs",
                title: "Sleeper Stretch for Shoulder",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on your affected side",
            "Bend affected elbow to 90 degrees in front of you",
            "Use other hand to gently push forearm toward floor",
            "Keep shoulder blade pressed down",
            "Feel stretch in back of shoulder",
            "Hold 30 seconds, repeat 3 times",
        ],
        conditions: &["rotator-cuff", "frozen-shoulder", "shoulder-impingement"],
    },
    ExerciseResource {
        id: "scapular-squeezes",
        name: "Scapular Squeezes (Shoulder Blade Squeeze)",
        category: "shoulder",
        body_part: "upper-back",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4498574/pexels-photo-4498574.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person squeezing shoulder blades together",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "QAJSuWs1dEU",
                title: "Scapular Squeeze Exercises",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Sit or stand with good posture",
            "Arms relaxed at sides",
            "Squeeze shoulder blades together and down",
            "Imagine holding a pencil between them",
            "Hold for 5 seconds",
            "Relax and repeat 10-15 times",
        ],
        conditions: &[
            "posture-problems",
            "upper-back-pain",
            "neck-pain",
            "shoulder-impingement",
            "scapular-dyskinesis",
        ],
    },
    ExerciseResource {
        id: "wall-slides",
        name: "Wall Slides",
        category: "shoulder",
        body_part: "shoulder",
        difficulty: Difficulty::Intermediate,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4162481/pexels-photo-4162481.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing wall slide exercise arms overhead",
                credit: "Pexels - Klaus Nielsen",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "HV1Y1hLqCHQ",
                title: "Wall Slides for Shoulder Mobility",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand with back against wall",
            "Feet about 6 inches from wall",
            "Press lower back, head, and arms against wall",
            "Arms in \"goal post\" position (90/90)",
            "Slowly slide arms up overhead",
            "Keep everything touching wall",
            "Slide back down, repeat 10-15 times",
        ],
        conditions: &[
            "posture-problems",
            "shoulder-impingement",
            "frozen-shoulder",
            "thoracic-kyphosis",
        ],
    },
    ExerciseResource {
        id: "cross-body-stretch",
        name: "Cross-Body Shoulder Stretch",
        category: "shoulder",
        body_part: "shoulder",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056723/pexels-photo-4056723.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing cross body shoulder stretch",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "8lDC4Ri9zAQ",
                title: "Cross Body Shoulder Stretch",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Bring affected arm across your body",
            "Use other hand to gently pull at the elbow",
            "Keep shoulder down, not raised up",
            "Feel stretch in back of shoulder",
            "Hold for 30 seconds",
            "Repeat 3 times each side",
        ],
        conditions: &["shoulder-impingement", "rotator-cuff", "frozen-shoulder"],
    },
    ExerciseResource {
        id: "doorway-chest-stretch",
        name: "Doorway Chest Stretch (Pec Stretch)",
        category: "shoulder",
        body_part: "chest",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4162481/pexels-photo-4162481.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person stretching chest muscles in doorway",
                credit: "Pexels - Klaus Nielsen",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "6Yh8lqKqS9s",
                title: "Doorway Pec Stretch",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand in doorway",
            "Place forearms on door frame, elbows at shoulder height",
            "Step one foot forward through doorway",
            "Lean forward until you feel stretch in chest",
            "Keep back straight, don't arch",
            "Hold 30 seconds, repeat 3 times",
        ],
        conditions: &["posture-problems", "shoulder-impingement", "rounded-shoulders"],
    },
    ExerciseResource {
        id: "shoulder-isometric-exercises",
        name: "Shoulder Isometrics",
        category: "shoulder",
        body_part: "shoulder",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4162481/pexels-photo-4162481.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person pushing against wall for isometric shoulder exercise",
                credit: "Pexels - Klaus Nielsen",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "bqL4pnNmX-s",
                title: "Shoulder Isometric Exercises",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand facing wall, elbow bent 90 degrees",
            "Push fist gently into wall (forward push)",
            "Hold 10 seconds - no movement, just push",
            "Repeat with side of arm against wall (side push)",
            "Repeat pushing backward against wall",
            "Do 10 repetitions each direction",
        ],
        conditions: &[
            "shoulder-impingement",
            "rotator-cuff",
            "shoulder-surgery",
            "frozen-shoulder",
        ],
    },
    ExerciseResource {
        id: "neck-range-of-motion",
        name: "Neck Range of Motion",
        category: "neck",
        body_part: "neck",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/5473182/pexels-photo-5473182.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person performing gentle neck movements",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "7Uos1EDw3Gk",
                title: "Neck Range of Motion Exercises",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Sit tall with shoulders relaxed",
            "Slowly turn head to look over right shoulder",
            "Return to center, then turn to left",
            "Tilt head ear to shoulder each side",
            "Look up toward ceiling, then down toward chest",
            "Move slowly, no jerky movements, 10 times each",
        ],
        conditions: &["neck-pain", "whiplash", "cervical-strain", "posture-problems"],
    },
    ExerciseResource {
        id: "chin-tucks",
        name: "Chin Tucks (Cervical Retraction)",
        category: "neck",
        body_part: "neck",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/5473182/pexels-photo-5473182.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person performing chin tuck exercise",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "wQylqaCl8Zo",
                title: "Chin Tucks for Neck Pain",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Sit or stand with good posture",
            "Look straight ahead",
            "Draw chin straight back (make a double chin)",
            "Don't tilt head up or down",
            "Feel lengthening at back of neck",
            "Hold 5 seconds, repeat 10-15 times",
        ],
        conditions: &[
            "neck-pain",
            "posture-problems",
            "cervical-disc",
            "headache-migraine",
            "forward-head-posture",
        ],
    },
    ExerciseResource {
        id: "levator-scapulae-stretch",
        name: "Levator Scapulae Stretch",
        category: "neck",
        body_part: "neck",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056723/pexels-photo-4056723.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person stretching side of neck looking down",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "yUm1Jc4mWEU",
                title: "Levator Scapulae Stretch",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Sit tall in chair, hold seat with right hand",
            "Turn head 45 degrees to left (look at armpit)",
            "Drop chin toward chest",
            "Use left hand to gently add pressure on back of head",
            "Feel stretch right side of neck/shoulder blade",
            "Hold 30 seconds, repeat 3 times each side",
        ],
        conditions: &["neck-pain", "upper-back-pain", "tension-headache", "stress-management"],
    },
    ExerciseResource {
        id: "upper-trap-stretch",
        name: "Upper Trapezius Stretch",
        category: "neck",
        body_part: "neck",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056723/pexels-photo-4056723.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person stretching upper trap ear to shoulder",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "zJfepwrYaRc",
                title: "Upper Trapezius Stretch",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Sit tall, hold seat with right hand to anchor shoulder",
            "Tilt left ear toward left shoulder",
            "Face forward (don't rotate head)",
            "Use left hand to gently add pressure",
            "Feel stretch along right side of neck",
            "Hold 30 seconds, repeat 3 times each side",
        ],
        conditions: &["neck-pain", "tension-headache", "stress-management", "posture-problems"],
    },
    ExerciseResource {
        id: "isometric-neck-exercises",
        name: "Isometric Neck Exercises",
        category: "neck",
        body_part: "neck",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/5473182/pexels-photo-5473182.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person pushing head against hand for neck isometrics",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "lJzEqSlYOWE",
                title: "Isometric Neck Strengthening",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Place hand on forehead",
            "Press head forward against hand - don't let head move",
            "Hold 10 seconds, relax",
            "Place hand on back of head, press backward",
            "Place hand on side of head, press sideways each side",
            "Repeat each direction 10 times",
        ],
        conditions: &["neck-pain", "cervical-strain", "whiplash", "neck-strengthening"],
    },
    ExerciseResource {
        id: "pelvic-tilts",
        name: "Pelvic Tilts",
        category: "lower-back",
        body_part: "lower-back",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person lying on back doing pelvic tilt exercise",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "bFwJPVE6H_E",
                title: "Pelvic Tilts for Back Pain",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on back with knees bent, feet flat on floor",
            "Flatten lower back against the floor",
            "Tighten abdominal muscles",
            "Tilt pelvis up slightly (belly button toward chest)",
            "Hold for 5-10 seconds",
            "Relax and repeat 10-15 times",
        ],
        conditions: &[
            "lower-back-pain",
            "sciatica",
            "disc-herniation",
            "core-weakness",
            "posture-problems",
        ],
    },
    ExerciseResource {
        id: "knee-to-chest-stretch",
        name: "Knee to Chest Stretch",
        category: "lower-back",
        body_part: "lower-back",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056723/pexels-photo-4056723.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person pulling knee to chest while lying down",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "6s2xTuGQyHM",
                title: "Knee to Chest Stretch for Back Pain",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on back with knees bent",
            "Bring one knee toward chest",
            "Clasp hands behind thigh (not over knee)",
            "Gently pull knee closer to chest",
            "Keep other foot on floor or extend leg",
            "Hold 20-30 seconds, switch legs, repeat 2-3 times each",
        ],
        conditions: &["lower-back-pain", "sciatica", "piriformis-syndrome", "hip-flexor-tightness"],
    },
    ExerciseResource {
        id: "double-knee-to-chest",
        name: "Double Knee to Chest",
        category: "lower-back",
        body_part: "lower-back",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056723/pexels-photo-4056723.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person hugging both knees to chest",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "6s2xTuGQyHM",
                title: "Double Knee to Chest Stretch",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on back",
            "Bring both knees toward chest",
            "Wrap arms around both knees",
            "Gently pull knees closer to chest",
            "Rock gently side to side (optional)",
            "Hold 20-30 seconds, repeat 3 times",
        ],
        conditions: &["lower-back-pain", "lower-back-stiffness"],
    },
    ExerciseResource {
        id: "cat-cow-stretch",
        name: "Cat-Cow Stretch",
        category: "lower-back",
        body_part: "spine",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056535/pexels-photo-4056535.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person on hands and knees doing cat cow stretch",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "kqnua4rHVVA",
                title: "Cat Cow Stretch",
                channel: "Yoga With Adriene",
            }),
        },
        instructions: &[
            "Start on hands and knees (tabletop position)",
            "CAT: Round spine up toward ceiling, tuck chin",
            "COW: Drop belly toward floor, lift head and tailbone",
            "Move slowly with your breath",
            "Inhale for cow, exhale for cat",
            "Repeat 10-15 cycles",
        ],
        conditions: &["lower-back-pain", "upper-back-pain", "spine-mobility", "general-wellness"],
    },
    ExerciseResource {
        id: "bird-dog",
        name: "Bird Dog",
        category: "lower-back",
        body_part: "core",
        difficulty: Difficulty::Intermediate,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056535/pexels-photo-4056535.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing bird dog exercise arm and leg extended",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "wiFNA3sqjCA",
                title: "Bird Dog Exercise",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Start on hands and knees (tabletop)",
            "Keep back flat and core engaged",
            "Extend right arm forward and left leg back",
            "Keep arm and leg parallel to floor",
            "Hold 5 seconds, return to start",
            "Switch sides (left arm, right leg)",
            "Repeat 10 times each side",
        ],
        conditions: &["lower-back-pain", "core-weakness", "balance-training"],
    },
    ExerciseResource {
        id: "bridges",
        name: "Glute Bridges",
        category: "lower-back",
        body_part: "glutes",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/6454069/pexels-photo-6454069.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing glute bridge exercise hips raised",
                credit: "Pexels - MART PRODUCTION",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "wPM8icPu6H8",
                title: "Glute Bridge Exercise",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on back, knees bent, feet flat on floor",
            "Arms at sides, palms down",
            "Squeeze glutes and lift hips off floor",
            "Body forms straight line from shoulders to knees",
            "Hold 2-3 seconds at the top",
            "Lower slowly, repeat 10-15 times",
        ],
        conditions: &["lower-back-pain", "hip-weakness", "glute-weakness", "piriformis-syndrome"],
    },
    ExerciseResource {
        id: "prone-press-up",
        name: "Prone Press-Up (McKenzie Extension)",
        category: "lower-back",
        body_part: "lower-back",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person pressing up from lying face down",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "dlNqr4G6DFM",
                title: "McKenzie Press Up Exercise",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie face down on floor",
            "Place hands under shoulders",
            "Slowly press upper body up, keeping hips on floor",
            "Straighten arms as much as comfortable",
            "Keep pelvis and legs relaxed on floor",
            "Hold 1-2 seconds at top, lower slowly",
            "Repeat 10 times",
        ],
        conditions: &["disc-herniation", "lower-back-pain", "sciatica"],
    },
    ExerciseResource {
        id: "lumbar-rotation-stretch",
        name: "Lower Trunk Rotation",
        category: "lower-back",
        body_part: "lower-back",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing lower back rotation lying down",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "58E1gQ5v-xs",
                title: "Lower Back Rotation Stretch",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on back, knees bent, feet flat",
            "Keep shoulders on floor",
            "Slowly drop both knees to the right",
            "Hold 15-30 seconds",
            "Return knees to center",
            "Drop both knees to the left",
            "Repeat 5 times each side",
        ],
        conditions: &["lower-back-pain", "lower-back-stiffness", "si-joint-dysfunction"],
    },
    ExerciseResource {
        id: "dead-bug",
        name: "Dead Bug",
        category: "lower-back",
        body_part: "core",
        difficulty: Difficulty::Intermediate,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing dead bug core exercise",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "I5xbsA71v1A",
                title: "Dead Bug Exercise",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on back, arms pointing toward ceiling",
            "Lift legs, bend knees 90 degrees (tabletop)",
            "Press low back into floor",
            "Slowly lower right arm overhead and left leg down",
            "Return to start, switch sides",
            "Keep core engaged, back flat throughout",
            "Repeat 10 times each side",
        ],
        conditions: &["lower-back-pain", "core-weakness", "disc-herniation"],
    },
    ExerciseResource {
        id: "child-pose",
        name: "Child's Pose",
        category: "lower-back",
        body_part: "back",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056535/pexels-photo-4056535.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person in child pose yoga position",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "2MJGg-dUKh0",
                title: "Childs Pose Stretch",
                channel: "Yoga With Adriene",
            }),
        },
        instructions: &[
            "Start on hands and knees",
            "Sit back on heels",
            "Extend arms forward on floor",
            "Rest forehead on floor",
            "Let lower back gently stretch",
            "Breathe deeply, hold 30-60 seconds",
        ],
        conditions: &["lower-back-pain", "stress-management", "general-wellness"],
    },
    ExerciseResource {
        id: "hip-flexor-stretch",
        name: "Hip Flexor Stretch (Kneeling Lunge)",
        category: "hip",
        body_part: "hip",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4162487/pexels-photo-4162487.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person in kneeling lunge stretch position",
                credit: "Pexels - Klaus Nielsen",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "UGEpQ1BRx-4",
                title: "Hip Flexor Stretch",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Kneel on one knee (use cushion if needed)",
            "Other foot flat in front, knee at 90 degrees",
            "Keep torso upright",
            "Shift weight forward until stretch in front of back hip",
            "Don't let front knee go past toes",
            "Hold 30 seconds, repeat 3 times each side",
        ],
        conditions: &["hip-pain", "lower-back-pain", "hip-flexor-tightness", "posture-problems"],
    },
    ExerciseResource {
        id: "piriformis-stretch",
        name: "Piriformis Stretch (Figure 4)",
        category: "hip",
        body_part: "hip",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056723/pexels-photo-4056723.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing figure 4 piriformis stretch",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "iYYu_nIdVcc",
                title: "Piriformis Stretch",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on back, knees bent",
            "Cross right ankle over left knee (figure 4)",
            "Reach through and grab behind left thigh",
            "Pull left leg toward chest",
            "Feel stretch deep in right buttock",
            "Hold 30 seconds, repeat 3 times each side",
        ],
        conditions: &["piriformis-syndrome", "sciatica", "hip-pain", "lower-back-pain"],
    },
    ExerciseResource {
        id: "clamshells",
        name: "Clamshells",
        category: "hip",
        body_part: "hip",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing clamshell exercise lying on side",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "nNJiF3Szd-c",
                title: "Clamshell Exercise",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on side, knees bent 45 degrees, feet together",
            "Keep pelvis stable, don't roll backward",
            "Lift top knee up (like clamshell opening)",
            "Keep feet touching throughout",
            "Lower slowly with control",
            "Repeat 15-20 times each side",
        ],
        conditions: &[
            "hip-pain",
            "hip-bursitis",
            "it-band-syndrome",
            "knee-pain",
            "glute-weakness",
        ],
    },
    ExerciseResource {
        id: "hip-abduction-sidelying",
        name: "Hip Abduction (Side Leg Raise)",
        category: "hip",
        body_part: "hip",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person lying on side raising top leg",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "jgh6sGwtTwk",
                title: "Side Leg Raises",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on side, bottom knee bent for stability",
            "Keep top leg straight",
            "Lift top leg toward ceiling",
            "Keep toes pointing forward, not up",
            "Don't let hip roll backward",
            "Lower slowly, repeat 15-20 times each side",
        ],
        conditions: &["hip-pain", "hip-bursitis", "it-band-syndrome", "hip-weakness"],
    },
    ExerciseResource {
        id: "hip-internal-rotation",
        name: "Hip Internal Rotation Stretch",
        category: "hip",
        body_part: "hip",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person stretching hip internal rotation",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "A2bWO-QSWYI",
                title: "Hip Internal Rotation Stretch",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Sit on floor with knees bent, feet flat and wide",
            "Let one knee fall inward toward floor",
            "Keep foot planted",
            "Feel stretch in outer hip/buttock",
            "Hold 30 seconds",
            "Repeat on other side",
        ],
        conditions: &["hip-pain", "hip-impingement", "hip-stiffness"],
    },
    ExerciseResource {
        id: "hip-external-rotation",
        name: "Hip External Rotation Stretch",
        category: "hip",
        body_part: "hip",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person stretching hip external rotation",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "A2bWO-QSWYI",
                title: "Hip External Rotation Stretch",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Sit on floor with knees bent",
            "Cross one ankle over opposite knee",
            "Gently press down on raised knee",
            "Keep back straight",
            "Feel stretch in outer hip",
            "Hold 30 seconds, switch sides",
        ],
        conditions: &["hip-pain", "piriformis-syndrome", "hip-stiffness"],
    },
    ExerciseResource {
        id: "standing-hip-flexion",
        name: "Standing Hip Flexion",
        category: "hip",
        body_part: "hip",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056535/pexels-photo-4056535.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person lifting knee while standing",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "dYs4Vn3mFYw",
                title: "Standing Hip Exercises",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand tall, hold chair or wall for balance",
            "Lift one knee up toward chest",
            "Keep back straight, don't lean back",
            "Lower foot back to floor",
            "Repeat 15 times each leg",
        ],
        conditions: &["hip-pain", "hip-replacement", "hip-weakness", "balance-training"],
    },
    ExerciseResource {
        id: "quad-sets",
        name: "Quad Sets",
        category: "knee",
        body_part: "knee",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person tightening thigh muscle lying down",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "D2t4KdOlXnI",
                title: "Quad Sets Exercise",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on back or sit with leg straight",
            "Tighten thigh muscle by pushing knee down into floor",
            "You should see kneecap move up slightly",
            "Hold for 5-10 seconds",
            "Relax and repeat",
            "Do 10-15 repetitions",
        ],
        conditions: &[
            "knee-pain",
            "acl-injury",
            "knee-surgery",
            "patella-problems",
            "knee-arthritis",
        ],
    },
    ExerciseResource {
        id: "straight-leg-raises",
        name: "Straight Leg Raises",
        category: "knee",
        body_part: "knee",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person raising straight leg while lying down",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "yJiBx6dzsHU",
                title: "Straight Leg Raise Exercise",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on back, one knee bent, other leg straight",
            "Tighten thigh muscle of straight leg",
            "Lift leg 6-8 inches off the ground",
            "Keep knee completely straight",
            "Hold 3-5 seconds at top",
            "Lower slowly, repeat 10-15 times each leg",
        ],
        conditions: &["knee-pain", "acl-injury", "knee-surgery", "knee-arthritis", "quad-weakness"],
    },
    ExerciseResource {
        id: "heel-slides",
        name: "Heel Slides",
        category: "knee",
        body_part: "knee",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person sliding heel toward buttock lying down",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "MIJ2HR5qJJg",
                title: "Heel Slides for Knee ROM",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on back with legs straight",
            "Slowly slide heel toward buttock",
            "Bend knee as far as comfortable",
            "Slide heel back to starting position",
            "Keep movement slow and controlled",
            "Repeat 10-15 times each leg",
        ],
        conditions: &["knee-surgery", "knee-replacement", "knee-stiffness", "acl-injury"],
    },
    ExerciseResource {
        id: "terminal-knee-extension",
        name: "Terminal Knee Extension",
        category: "knee",
        body_part: "knee",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3823039/pexels-photo-3823039.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person straightening knee over towel roll",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "DNlBRkHZvhw",
                title: "Terminal Knee Extension",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Place towel roll under affected knee",
            "Straighten knee by lifting heel off floor",
            "Squeeze thigh muscle at top",
            "Hold 5 seconds",
            "Lower slowly",
            "Repeat 10-15 times",
        ],
        conditions: &["acl-injury", "knee-surgery", "patella-problems", "knee-weakness"],
    },
    ExerciseResource {
        id: "hamstring-curls-standing",
        name: "Standing Hamstring Curls",
        category: "knee",
        body_part: "knee",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4162487/pexels-photo-4162487.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person standing curling heel toward buttock",
                credit: "Pexels - Klaus Nielsen",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "cBbgOy7X9yQ",
                title: "Standing Hamstring Curls",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand holding chair or wall for balance",
            "Bend one knee, bringing heel toward buttock",
            "Keep thighs parallel (knee pointing down)",
            "Lower foot back to floor",
            "Repeat 15 times each leg",
        ],
        conditions: &["knee-pain", "hamstring-strain", "knee-surgery", "acl-injury"],
    },
    ExerciseResource {
        id: "hamstring-stretch-supine",
        name: "Hamstring Stretch (Lying)",
        category: "knee",
        body_part: "thigh",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056723/pexels-photo-4056723.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person stretching hamstring lying on back",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "FDwpEdxZ4H4",
                title: "Hamstring Stretch Lying Down",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Lie on back near doorway",
            "Raise leg and rest it on door frame",
            "Other leg through doorway, flat on floor",
            "Scoot closer to door to increase stretch",
            "Feel stretch in back of thigh",
            "Hold 30 seconds, repeat 3 times each leg",
        ],
        conditions: &["hamstring-strain", "lower-back-pain", "sciatica", "knee-pain"],
    },
    ExerciseResource {
        id: "wall-sits",
        name: "Wall Sits",
        category: "knee",
        body_part: "knee",
        difficulty: Difficulty::Intermediate,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4162481/pexels-photo-4162481.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing wall sit against wall",
                credit: "Pexels - Klaus Nielsen",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "y-wV4Lz6EIM",
                title: "Wall Sit Exercise",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand with back against wall",
            "Slide down until knees bent 45-60 degrees",
            "Keep knees over ankles, not past toes",
            "Hold position as long as comfortable",
            "Stand back up",
            "Work up to 30-60 seconds, repeat 3 times",
        ],
        conditions: &["knee-pain", "patella-problems", "quad-weakness", "knee-arthritis"],
    },
    ExerciseResource {
        id: "step-ups",
        name: "Step Ups",
        category: "knee",
        body_part: "knee",
        difficulty: Difficulty::Intermediate,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4162487/pexels-photo-4162487.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person stepping up onto platform",
                credit: "Pexels - Klaus Nielsen",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "dQqApCGd5Ss",
                title: "Step Up Exercise",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand facing stairs or step (4-8 inch height)",
            "Step up with affected leg",
            "Straighten leg fully on step",
            "Tap other foot on step, then lower it down",
            "Control the movement - don't let knee collapse inward",
            "Repeat 10-15 times each leg",
        ],
        conditions: &["knee-pain", "knee-surgery", "patella-problems", "acl-injury"],
    },
    ExerciseResource {
        id: "ankle-pumps",
        name: "Ankle Pumps",
        category: "ankle-foot",
        body_part: "ankle",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4498607/pexels-photo-4498607.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person pumping ankle up and down",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "0A9jqfIp6sg",
                title: "Ankle Pumps Exercise",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Sit or lie with legs extended",
            "Point toes away from you (plantarflexion)",
            "Pull toes toward you (dorsiflexion)",
            "Move in a pumping motion",
            "Keep movement smooth and rhythmic",
            "Repeat 20-30 times",
        ],
        conditions: &["ankle-sprain", "ankle-surgery", "dvt-prevention", "swelling", "circulation"],
    },
    ExerciseResource {
        id: "ankle-circles",
        name: "Ankle Circles",
        category: "ankle-foot",
        body_part: "ankle",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4498607/pexels-photo-4498607.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person rotating ankle in circle",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "0A9jqfIp6sg",
                title: "Ankle Circle Exercises",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Sit or lie with legs extended",
            "Lift one foot slightly",
            "Draw circles in the air with toes",
            "Make 10 circles clockwise",
            "Make 10 circles counterclockwise",
            "Repeat with other foot",
        ],
        conditions: &["ankle-sprain", "ankle-stiffness", "ankle-surgery"],
    },
    ExerciseResource {
        id: "calf-raises",
        name: "Calf Raises",
        category: "ankle-foot",
        body_part: "calf",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4498574/pexels-photo-4498574.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person rising up on toes for calf raise",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "gwLzBJYoWlI",
                title: "Calf Raises Exercise",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand with feet hip-width apart",
            "Hold wall or chair for balance",
            "Rise up onto toes, lifting heels",
            "Hold at top for 2-3 seconds",
            "Lower heels slowly back down",
            "Repeat 10-15 times, work up to 3 sets",
        ],
        conditions: &["ankle-sprain", "achilles-tendonitis", "plantar-fasciitis", "calf-strain"],
    },
    ExerciseResource {
        id: "calf-stretch-wall",
        name: "Calf Stretch (Wall)",
        category: "ankle-foot",
        body_part: "calf",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4162481/pexels-photo-4162481.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person stretching calf against wall",
                credit: "Pexels - Klaus Nielsen",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "q1_qVQN3fDA",
                title: "Calf Stretch Against Wall",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand facing wall, hands on wall",
            "Step one foot back, keeping it flat",
            "Bend front knee, keep back knee straight",
            "Lean into wall until stretch in back calf",
            "Hold 30 seconds",
            "Repeat 3 times each leg",
        ],
        conditions: &["achilles-tendonitis", "plantar-fasciitis", "calf-strain", "ankle-sprain"],
    },
    ExerciseResource {
        id: "towel-scrunches",
        name: "Towel Scrunches",
        category: "ankle-foot",
        body_part: "foot",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4498607/pexels-photo-4498607.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Foot scrunching towel on floor",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "Gcm564ZKsIk",
                title: "Towel Scrunches for Feet",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Sit with foot flat on towel on floor",
            "Keep heel on floor",
            "Use toes to scrunch towel toward you",
            "Spread toes and push towel away",
            "Repeat scrunching motion",
            "Do 2-3 sets of 10 scrunches each foot",
        ],
        conditions: &["plantar-fasciitis", "foot-pain", "flat-feet", "foot-weakness"],
    },
    ExerciseResource {
        id: "ankle-inversion-eversion",
        name: "Ankle Inversion/Eversion",
        category: "ankle-foot",
        body_part: "ankle",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4498607/pexels-photo-4498607.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person turning ankle inward and outward",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "3dr2quCx8x4",
                title: "Ankle Inversion and Eversion",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Sit with foot off floor",
            "Turn sole of foot inward (inversion)",
            "Hold 2 seconds",
            "Turn sole of foot outward (eversion)",
            "Hold 2 seconds",
            "Repeat 10-15 times each direction",
        ],
        conditions: &["ankle-sprain", "ankle-instability", "ankle-surgery"],
    },
    ExerciseResource {
        id: "balance-single-leg",
        name: "Single Leg Balance",
        category: "ankle-foot",
        body_part: "ankle",
        difficulty: Difficulty::Intermediate,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056535/pexels-photo-4056535.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person balancing on one leg",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "unXfNj9oaB8",
                title: "Single Leg Balance Exercise",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand near wall or chair for safety",
            "Lift one foot slightly off ground",
            "Try to balance for 30 seconds",
            "Keep standing leg slightly bent",
            "Use support as needed",
            "Work up to 60 seconds, eyes closed for challenge",
        ],
        conditions: &["ankle-sprain", "balance-training", "fall-prevention", "ankle-instability"],
    },
    ExerciseResource {
        id: "plantar-fascia-stretch",
        name: "Plantar Fascia Stretch",
        category: "ankle-foot",
        body_part: "foot",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4498607/pexels-photo-4498607.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person stretching bottom of foot",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "b2ycgKh-xrM",
                title: "Plantar Fascia Stretch",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Sit and cross affected foot over opposite knee",
            "Hold toes and pull them back toward shin",
            "Feel stretch along arch of foot",
            "Massage arch with other hand if desired",
            "Hold 30 seconds",
            "Repeat 3 times, especially in morning",
        ],
        conditions: &["plantar-fasciitis", "foot-pain", "heel-pain"],
    },
    ExerciseResource {
        id: "walking",
        name: "Walking",
        category: "cardio",
        body_part: "full-body",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4148932/pexels-photo-4148932.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person walking outdoors for exercise",
                credit: "Pexels - Ketut Subiyanto",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "njeZ29umqVE",
                title: "15 Minute Walking Workout",
                channel: "Walk at Home",
            }),
        },
        instructions: &[
            "Start at comfortable, easy pace",
            "Stand tall with shoulders back",
            "Swing arms naturally at sides",
            "Take smooth, even steps",
            "Aim for 15-30 minutes",
            "Gradually increase pace or distance",
        ],
        conditions: &[
            "general-wellness",
            "cardiac-rehab",
            "weight-management",
            "diabetes",
            "arthritis",
        ],
    },
    ExerciseResource {
        id: "stationary-marching",
        name: "Stationary Marching",
        category: "cardio",
        body_part: "full-body",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4162481/pexels-photo-4162481.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person marching in place",
                credit: "Pexels - Klaus Nielsen",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "bMaI9e_sXAE",
                title: "March in Place Workout",
                channel: "HASfit",
            }),
        },
        instructions: &[
            "Stand with feet hip-width apart",
            "March in place lifting knees",
            "Pump arms as you march",
            "Keep core engaged",
            "Maintain steady rhythm",
            "Continue for 5-10 minutes",
        ],
        conditions: &["general-wellness", "cardiac-rehab", "fall-prevention", "warm-up"],
    },
    ExerciseResource {
        id: "bodyweight-squats",
        name: "Bodyweight Squats",
        category: "strength",
        body_part: "legs",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4162487/pexels-photo-4162487.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person performing bodyweight squat",
                credit: "Pexels - Klaus Nielsen",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "aclHkVaku9U",
                title: "How to Squat Correctly",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand with feet shoulder-width apart",
            "Keep chest up and core engaged",
            "Push hips back as if sitting in chair",
            "Lower until thighs parallel to floor (or as comfortable)",
            "Keep knees over toes, not collapsing inward",
            "Push through heels to stand",
            "Repeat 10-15 times",
        ],
        conditions: &[
            "general-wellness",
            "knee-strengthening",
            "hip-strengthening",
            "fall-prevention",
        ],
    },
    ExerciseResource {
        id: "chair-squats",
        name: "Chair Squats (Sit to Stand)",
        category: "strength",
        body_part: "legs",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4162487/pexels-photo-4162487.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing sit to stand from chair",
                credit: "Pexels - Klaus Nielsen",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "V9xDbFpf2lE",
                title: "Sit to Stand Exercise",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Sit at edge of sturdy chair",
            "Feet flat, shoulder-width apart",
            "Lean slightly forward",
            "Push through heels to stand",
            "Slowly lower back to seated",
            "Don't use hands for assistance",
            "Repeat 10-15 times",
        ],
        conditions: &["fall-prevention", "knee-weakness", "hip-replacement", "general-wellness"],
    },
    ExerciseResource {
        id: "lunges",
        name: "Lunges",
        category: "strength",
        body_part: "legs",
        difficulty: Difficulty::Intermediate,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4162487/pexels-photo-4162487.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person performing forward lunge",
                credit: "Pexels - Klaus Nielsen",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "QOVaHwm-Q6U",
                title: "How to Do Lunges",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand tall with feet hip-width apart",
            "Step forward with one leg",
            "Lower body until both knees at 90 degrees",
            "Keep front knee over ankle, not past toes",
            "Push back to starting position",
            "Repeat 10 times each leg",
        ],
        conditions: &["leg-strengthening", "balance-training", "general-wellness"],
    },
    ExerciseResource {
        id: "morning-stretch",
        name: "Morning Stretch Routine",
        category: "stretching",
        body_part: "full-body",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056723/pexels-photo-4056723.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing morning stretches",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "itJE95SLcAs",
                title: "5 Minute Morning Stretch",
                channel: "MadFit",
            }),
        },
        instructions: &[
            "Reach arms overhead, stretch tall",
            "Gentle neck rolls - each direction",
            "Shoulder shrugs and circles",
            "Side bends - reach over head each side",
            "Standing forward fold (touch toes)",
            "Hold each stretch 15-30 seconds",
        ],
        conditions: &["general-wellness", "flexibility", "morning-routine", "stiffness"],
    },
    ExerciseResource {
        id: "gentle-stretching",
        name: "Gentle Full Body Stretching",
        category: "stretching",
        body_part: "full-body",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056723/pexels-photo-4056723.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing gentle stretches",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "g_tea8ZNk5A",
                title: "Full Body Stretching Routine",
                channel: "Yoga With Adriene",
            }),
        },
        instructions: &[
            "Move slowly and gently",
            "Only stretch to comfortable point - no pain",
            "Start with neck and shoulder stretches",
            "Move to back and hip stretches",
            "Finish with leg stretches",
            "Breathe deeply throughout",
            "Hold each stretch 20-30 seconds",
        ],
        conditions: &["general-wellness", "flexibility", "arthritis", "fibromyalgia"],
    },
    ExerciseResource {
        id: "deep-breathing",
        name: "Deep Breathing (Diaphragmatic)",
        category: "breathing",
        body_part: "respiratory",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3822622/pexels-photo-3822622.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person practicing deep breathing",
                credit: "Pexels - Andrea Piacquadio",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "tybOi4hjZFQ",
                title: "Deep Breathing Exercises",
                channel: "Goodful",
            }),
        },
        instructions: &[
            "Sit or lie comfortably",
            "Place one hand on chest, one on belly",
            "Breathe in slowly through nose for 4 counts",
            "Feel belly rise (chest stays still)",
            "Hold for 2 counts",
            "Exhale slowly through mouth for 6 counts",
            "Repeat 5-10 cycles",
        ],
        conditions: &["stress-management", "copd", "asthma", "anxiety", "general-wellness"],
    },
    ExerciseResource {
        id: "pursed-lip-breathing",
        name: "Pursed Lip Breathing",
        category: "breathing",
        body_part: "respiratory",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/3822622/pexels-photo-3822622.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person doing pursed lip breathing",
                credit: "Pexels - Andrea Piacquadio",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "RSkaFHmVta8",
                title: "Pursed Lip Breathing Technique",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Relax shoulders",
            "Inhale through nose for 2 counts",
            "Purse lips like blowing out candle",
            "Exhale slowly through pursed lips for 4 counts",
            "The exhale should be twice as long as inhale",
            "Repeat 4-5 times or as needed",
        ],
        conditions: &["copd", "asthma", "shortness-of-breath", "pulmonary-rehab"],
    },
    ExerciseResource {
        id: "balance-practice",
        name: "Balance Practice",
        category: "balance",
        body_part: "full-body",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056535/pexels-photo-4056535.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person practicing balance on one leg",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "unXfNj9oaB8",
                title: "Balance Exercises for Beginners",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand near wall or chair for safety",
            "Shift weight to one leg",
            "Lift other foot slightly off ground",
            "Try to balance for 30 seconds",
            "Use support as needed for safety",
            "Switch legs and repeat",
        ],
        conditions: &[
            "fall-prevention",
            "vestibular-disorder",
            "ankle-instability",
            "stroke-recovery",
        ],
    },
    ExerciseResource {
        id: "tandem-stance",
        name: "Tandem Stance (Heel to Toe)",
        category: "balance",
        body_part: "full-body",
        difficulty: Difficulty::Intermediate,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4056535/pexels-photo-4056535.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person standing heel to toe",
                credit: "Pexels - Elina Fairytale",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "unXfNj9oaB8",
                title: "Tandem Stance Balance",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand near wall or counter",
            "Place one foot directly in front of other",
            "Heel of front foot touches toes of back foot",
            "Hold position for 30 seconds",
            "Switch which foot is in front",
            "Progress to no hand support",
        ],
        conditions: &["fall-prevention", "vestibular-disorder", "balance-training"],
    },
    ExerciseResource {
        id: "heel-toe-walking",
        name: "Heel to Toe Walking",
        category: "balance",
        body_part: "full-body",
        difficulty: Difficulty::Intermediate,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4148932/pexels-photo-4148932.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person walking heel to toe in line",
                credit: "Pexels - Ketut Subiyanto",
            }),
            video: Some(Video {
                provider: VideoProvider::YouTube,
                id: "unXfNj9oaB8",
                title: "Heel Toe Walking",
                channel: "AskDoctorJo",
            }),
        },
        instructions: &[
            "Stand near wall for safety",
            "Walk in a straight line",
            "Place heel of front foot against toes of back foot",
            "Walk like on a tightrope",
            "Take 10-20 steps",
            "Turn around and repeat",
        ],
        conditions: &["fall-prevention", "vestibular-disorder", "balance-training"],
    },
    ExerciseResource {
        id: "default",
        name: "General Exercise",
        category: "general",
        body_part: "full-body",
        difficulty: Difficulty::Beginner,
        media: Media {
            image: Some(Image {
                url: "https://images.pexels.com/photos/4498574/pexels-photo-4498574.jpeg?auto=compress&cs=tinysrgb&w=600&h=400&fit=crop",
                alt: "Person exercising",
                credit: "Pexels - Karolina Grabowska",
            }),
            video: None,
        },
        instructions: &[
            "Follow your physical therapist's instructions",
            "Move slowly and carefully",
            "Stop if you feel any sharp pain",
            "Maintain proper form throughout",
            "Breathe normally during exercises",
        ],
        conditions: &["general"],
    },
];
