/// Points per section for the job recommendation score.
/// Every section always counts toward the maximum, so the default maximum is 100.
pub const MATCH_WEIGHTS: MatchWeights = MatchWeights {
    skills: 40.0,
    interests: 20.0,
    job_type: 20.0,
    location: 10.0,
    experience: 10.0,
};

/// Points per section for the profile-side match quality score.
/// Sections only count when both sides carry the data.
pub const QUALITY_WEIGHTS: QualityWeights = QualityWeights {
    skills: 40.0,
    experience: 20.0,
    tags: 20.0,
    location: 20.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub skills: f64,
    pub interests: f64,
    pub job_type: f64,
    pub location: f64,
    pub experience: f64,
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.interests + self.job_type + self.location + self.experience
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityWeights {
    pub skills: f64,
    pub experience: f64,
    pub tags: f64,
    pub location: f64,
}

impl QualityWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.tags + self.location
    }
}
