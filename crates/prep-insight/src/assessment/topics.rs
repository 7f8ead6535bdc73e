//! Keyword tables attributing questions to syllabus topics.
//!
//! This is data, not code: the fallback report's topic scoring matches each
//! keyword as a case-insensitive substring of the question text, so revising
//! a table never touches the scoring logic. A question may hit zero, one, or
//! several topics.

pub struct TopicKeywords {
    pub topic: &'static str,
    pub keywords: &'static [&'static str],
}

/// Keyword tables for a subject. Non-core subjects have no topic tables and
/// return an empty slice.
pub fn for_subject(subject: &str) -> &'static [TopicKeywords] {
    match subject {
        "Physics" => PHYSICS_TOPICS,
        "Chemistry" => CHEMISTRY_TOPICS,
        "Mathematics" => MATHEMATICS_TOPICS,
        _ => &[],
    }
}

static PHYSICS_TOPICS: &[TopicKeywords] = &[
    TopicKeywords {
        topic: "Mechanics",
        keywords: &[
            "circular motion", "kinetic energy", "acceleration", "velocity", "force", "motion",
            "momentum", "work", "power", "energy", "rotational", "newton", "gravity", "friction",
        ],
    },
    TopicKeywords {
        topic: "Electromagnetism",
        keywords: &[
            "electric current", "potential difference", "charge", "ampere", "volt",
            "magnetic field", "electromagnetic", "capacitor", "inductor", "resistance",
            "ohm", "conductor", "insulator", "electric field",
        ],
    },
    TopicKeywords {
        topic: "Waves & Oscillations",
        keywords: &[
            "pendulum", "light", "refraction", "wave", "oscillation", "frequency",
            "amplitude", "wavelength", "sound", "interference", "diffraction", "polarization",
            "standing wave", "resonance",
        ],
    },
    TopicKeywords {
        topic: "Thermodynamics",
        keywords: &[
            "specific heat", "gas", "temperature", "heat", "thermal",
            "entropy", "pressure", "volume", "adiabatic", "isothermal",
            "carnot cycle", "heat engine", "thermodynamic",
        ],
    },
    TopicKeywords {
        topic: "Modern Physics",
        keywords: &[
            "quantum", "photoelectric", "nuclear", "relativity", "atom",
            "particle", "wave-particle", "radiation", "half-life", "fusion",
            "fission", "quantum mechanics",
        ],
    },
    TopicKeywords {
        topic: "Optics",
        keywords: &[
            "lens", "mirror", "reflection", "refraction", "prism",
            "optical", "focal length", "magnification", "telescope", "microscope",
            "ray diagram", "total internal reflection",
        ],
    },
];

static CHEMISTRY_TOPICS: &[TopicKeywords] = &[
    TopicKeywords {
        topic: "Physical Chemistry",
        keywords: &[
            "ph", "solution", "gas", "pressure", "temperature", "equilibrium",
            "kinetics", "thermochemistry", "electrochemistry", "surface chemistry",
            "colligative", "phase rule", "conductivity", "electrolysis",
        ],
    },
    TopicKeywords {
        topic: "Inorganic Chemistry",
        keywords: &[
            "noble gas", "atomic number", "electron", "periodic", "atomic",
            "transition metal", "coordination compound", "crystal", "ionic",
            "metallurgy", "acid base", "salt", "oxidation state", "chemical bonding",
        ],
    },
    TopicKeywords {
        topic: "Organic Chemistry",
        keywords: &[
            "glucose", "molecular formula", "compound", "carbon", "alkane",
            "alkene", "alkyne", "alcohol", "ether", "aldehyde", "ketone",
            "carboxylic acid", "amine", "benzene", "aromatic", "polymer",
            "isomerism", "stereochemistry",
        ],
    },
    TopicKeywords {
        topic: "Chemical Reactions",
        keywords: &[
            "redox", "acid", "base", "reaction", "strong acid", "strong base",
            "neutralization", "precipitation", "decomposition", "combination",
            "displacement", "double displacement", "catalysis",
        ],
    },
    TopicKeywords {
        topic: "Analytical Chemistry",
        keywords: &[
            "titration", "indicator", "qualitative", "quantitative", "analysis",
            "chromatography", "spectroscopy", "gravimetric", "volumetric",
        ],
    },
];

static MATHEMATICS_TOPICS: &[TopicKeywords] = &[
    TopicKeywords {
        topic: "Calculus",
        keywords: &[
            "derivative", "integration", "limit", "function", "differential",
            "maxima", "minima", "continuity", "differentiability", "application",
            "partial derivative", "definite integral", "indefinite integral",
        ],
    },
    TopicKeywords {
        topic: "Algebra",
        keywords: &[
            "equation", "matrix", "determinant", "solution", "polynomial",
            "quadratic", "cubic", "complex number", "vector", "progression",
            "sequence", "series", "permutation", "combination",
        ],
    },
    TopicKeywords {
        topic: "Trigonometry",
        keywords: &[
            "sin", "cos", "tan", "angle", "theta", "inverse trigonometric",
            "trigonometric equation", "height and distance", "triangle",
            "periodic function", "identities", "transformation",
        ],
    },
    TopicKeywords {
        topic: "Coordinate Geometry",
        keywords: &[
            "circle", "line", "point", "radius", "center", "parabola",
            "ellipse", "hyperbola", "conic section", "distance formula",
            "section formula", "parametric form", "3d geometry",
        ],
    },
    TopicKeywords {
        topic: "Vectors & 3D",
        keywords: &[
            "vector", "scalar", "dot product", "cross product", "direction cosine",
            "plane", "straight line", "skew lines", "shortest distance",
            "angle between lines", "angle between planes",
        ],
    },
    TopicKeywords {
        topic: "Statistics & Probability",
        keywords: &[
            "probability", "mean", "median", "mode", "standard deviation",
            "variance", "random variable", "binomial", "normal distribution",
            "correlation", "regression", "sampling",
        ],
    },
];
