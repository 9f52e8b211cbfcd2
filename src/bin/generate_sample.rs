/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform pick from a slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let genders = ["M", "M", "M", "F", "F", "F", "F", "XNA"];
    let contract_types = ["Cash loans", "Cash loans", "Cash loans", "Revolving loans"];
    let own_car = ["Y", "N"];
    // More than ten occupations, so this column stays un-encoded.
    let occupations = [
        "Accountants",
        "Cleaning staff",
        "Cooking staff",
        "Core staff",
        "Drivers",
        "HR staff",
        "High skill tech staff",
        "IT staff",
        "Laborers",
        "Managers",
        "Medicine staff",
        "Sales staff",
    ];

    let output_path = "sample_application_train.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    writer
        .write_record([
            "SK_ID_CURR",
            "TARGET",
            "NAME_CONTRACT_TYPE",
            "CODE_GENDER",
            "FLAG_OWN_CAR",
            "OCCUPATION_TYPE",
            "AMT_INCOME_TOTAL",
            "AMT_CREDIT",
            "DAYS_BIRTH",
        ])
        .expect("Failed to write header");

    let rows = 200;
    for i in 0..rows {
        let id = 100001 + i;
        let target = if rng.next_f64() < 0.08 { 1 } else { 0 };
        let income = 25650.0 + (rng.next_f64() * 180000.0 / 450.0).floor() * 450.0;
        let credit = 45000.0 + (rng.next_f64() * 1800000.0 / 4500.0).floor() * 4500.0;
        let days_birth = -(7000 + (rng.next_u64() % 18000) as i64);
        // Occupation is sometimes unknown, as in the real dataset.
        let occupation = if rng.next_f64() < 0.3 {
            ""
        } else {
            *rng.choose(&occupations)
        };

        writer
            .write_record([
                id.to_string(),
                target.to_string(),
                rng.choose(&contract_types).to_string(),
                rng.choose(&genders).to_string(),
                rng.choose(&own_car).to_string(),
                occupation.to_string(),
                format!("{income:.1}"),
                format!("{credit:.1}"),
                days_birth.to_string(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} rows to {output_path}");
}
