use rowred::Matrix;

fn main() -> Result<(), rowred::LaError> {
    env_logger::init();

    let m = Matrix::from_rows(vec![
        vec![1.0, 3.0],
        vec![5.0, 6.0],
        vec![4.0, 3.0],
    ])?;

    let m2 = Matrix::from_rows(vec![
        vec![1.0, 3.0, 1.0, 1.0],
        vec![2.0, 3.0, 5.0, 2.0],
        vec![5.0, 2.0, 4.0, 5.0],
    ])?;

    let m3 = Matrix::from_rows(vec![
        vec![1.0, 5.0, 6.0, 7.0, 1.0],
        vec![4.0, 3.0, 2.0, 8.0, 2.0],
        vec![4.0, 2.0, 5.0, 3.0, 6.0],
    ])?;

    let m1 = Matrix::from_rows(vec![
        vec![1.0, 3.0, 4.0, 12.0],
        vec![2.0, 3.0, 5.0, 54.0],
        vec![3.0, 10.0, 4.0, 3.0],
        vec![2.0, 54.0, 67.0, 9.0],
    ])?;

    print!("{}", m.rre().prettify());

    println!("rank/nullity of m2 = {:?}, of m3 = {:?}", m2.rank_null(), m3.rank_null());
    println!("det(m1) = {} (laplace: {})", m1.det()?, m1.laplace_det()?);
    println!("inverse(m1):\n{}", m1.inverse()?);
    Ok(())
}
