use bit_stream::bit_ops::set_bits;
use bit_stream::{BitStreamError, BitStreamReader};

fn main() {
    println!("=== Bit Stream Examples ===\n");

    // Example 1: MSB-first reads across byte boundaries
    let _ = example_msb_first();

    // Example 2: LSB-first packed fields
    let _ = example_lsb_first();

    // Example 3: Running out of input
    example_end_of_stream();
}

fn example_msb_first() -> Result<(), BitStreamError> {
    println!("Example 1: Nibbles and a 12-bit field");

    let mut reader = BitStreamReader::from_slice(&[0xCA, 0xFE, 0xBA]);
    println!("  high nibble: {:#x}", reader.read(4, false)?);
    println!("  next 12 bits: {:#x}", reader.read(12, false)?);
    println!("  pending: {} bits", reader.pending_bits());
    println!();

    Ok(())
}

fn example_lsb_first() -> Result<(), BitStreamError> {
    println!("Example 2: Fields packed least-significant-bit first");

    // 9-bit id, 10-bit value, repeated
    let fields = [(0u64, 9usize), (75, 10), (2, 9), (30, 10)];
    let total: usize = fields.iter().map(|(_, w)| w).sum();
    let mut buf = vec![0u8; total.div_ceil(8)];

    let mut offset = 0;
    for (value, width) in fields {
        set_bits(&mut buf, offset, width, value);
        offset += width;
    }
    println!("  packed {} bits into {} bytes", total, buf.len());

    let mut reader = BitStreamReader::from_slice(&buf);
    for _ in 0..2 {
        let id = reader.read_lsb_first(9)?;
        let value = reader.read_lsb_first(10)?;
        println!("  id {} = {}", id, value);
    }
    println!();

    Ok(())
}

fn example_end_of_stream() {
    println!("Example 3: Reading past the end");

    let mut reader = BitStreamReader::from_slice(&[0xFF]);
    match reader.read(16, false) {
        Ok(v) => println!("  unexpected value {}", v),
        Err(e) => println!("  {}", e),
    }
}
