#![cfg(test)]

use std::cell::{Cell, RefCell};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::path_gen::EntropySource;
use crate::util::clock::Clock;

pub const POST_DATA_MD: &str = "---
id: 21c1e9ad4ebb4168a543fbf77cc35a85
title: What I learned after 20+ years of software development
author: thiago
date: 2022-04-02 12:05:00.000
path: /blog/posts/what-i-learned-9a1b2c3d
---

# What I learned after 20+ years of software development
How to be a great software engineer?

Someone asked me this question today and I didn’t have an answer.
";

pub const POST_DATA_MD_BODY: &str = "
# What I learned after 20+ years of software development
How to be a great software engineer?

Someone asked me this question today and I didn’t have an answer.
";

pub const NEW_POST_MD: &str = "---
title: My First Post
author: thiago
---

Hello from the **first** post.
";

pub const NO_HEADER_MD: &str = "# A post without front matter

Just text.
";

pub const POST_DATA_HTML: &str = "---
id: 7f1d5bd1c8a04f0e9b7e16a6d3c2a001
title: An HTML page
---
<p>Already rendered.</p>
";

/// Repeats the given bytes forever.
pub struct FixedEntropy(pub Vec<u8>);

impl EntropySource for FixedEntropy {
    fn fill(&self, buf: &mut [u8]) {
        for (i, b) in buf.iter_mut().enumerate() {
            *b = self.0[i % self.0.len()];
        }
    }
}

/// Every draw returns bytes one higher than the previous draw.
pub struct CountingEntropy(pub Cell<u8>);

impl EntropySource for CountingEntropy {
    fn fill(&self, buf: &mut [u8]) {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        buf.fill(next);
    }
}

/// Advances one second on every call so timestamps strictly increase.
pub struct StepClock(pub RefCell<DateTime<Utc>>);

impl StepClock {
    pub fn starting_at(start: DateTime<Utc>) -> StepClock {
        StepClock(RefCell::new(start))
    }

    pub fn default_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 22, 10, 0, 0).unwrap()
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let mut now = self.0.borrow_mut();
        *now += Duration::seconds(1);
        *now
    }
}
