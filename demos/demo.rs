use universal_hashtable::{HashParams, HashTable};

fn main() {
    let m = 100;
    let params = match HashParams::initialize(m) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("cannot initialize hash parameters: {e}");
            std::process::exit(1);
        }
    };

    let mut h: HashTable = HashTable::new(params);

    for v in [1, 10, 20] {
        h.insert(v);
        println!("Inserting {v} in the hashtable.");
    }

    for i in 0..21 {
        println!("{i} was found in h : {}", h.search(i) as u8);
    }

    h.remove(10);
    println!("Removing 10 from the hashtable.");
    println!("10 was found in h : {}", h.search(10) as u8);

    h.release();
}
