use crate::errors::EnigmaCryptoError;
use crate::matrix::{Matrix, Vector};

/// A·x where A is an m×n matrix and x is a length–n vector.
/// Returns an m‐vector.
pub fn matrix_vector_mul(a: &Matrix, x: &Vector) -> Result<Vector, EnigmaCryptoError> {
    let m = a.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    let n = a[0].len();
    if x.len() != n {
        return Err(EnigmaCryptoError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    let mut y = vec![0i64; m];
    for i in 0..m {
        if a[i].len() != n {
            return Err(EnigmaCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                a[i].len(),
                n
            )));
        }
        let mut sum = 0i64;
        for j in 0..n {
            sum += a[i][j] * x[j];
        }
        y[i] = sum;
    }
    Ok(y)
}

/// Computes the matrix product `C = AB`.
///
/// # Errors
///
/// Returns `EnigmaCryptoError::DimensionMismatch` if the inner dimensions of
/// the matrices do not match or if rows within the matrices have inconsistent
/// lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix) -> Result<Matrix, EnigmaCryptoError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = a[0].len(); // cols in A

    if b.len() != m_common {
        return Err(EnigmaCryptoError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }
    if m_common == 0 {
        return Ok(vec![Vec::new(); n]);
    }
    let p = b[0].len(); // cols in B

    let mut c = vec![vec![0; p]; n];

    for i in 0..n {
        if a[i].len() != m_common {
            return Err(EnigmaCryptoError::DimensionMismatch(format!(
                "Matrix A row {} has incorrect length (expected {})",
                i, m_common
            )));
        }
        for j in 0..p {
            let mut sum = 0i64;
            #[allow(clippy::needless_range_loop)]
            for k in 0..m_common {
                if b[k].len() != p {
                    return Err(EnigmaCryptoError::DimensionMismatch(format!(
                        "Matrix B row {} has incorrect length (expected {})",
                        k, p
                    )));
                }
                sum += a[i][k] * b[k][j];
            }
            c[i][j] = sum;
        }
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Transposes a rectangular matrix. For a permutation matrix the transpose is
/// also its inverse.
pub fn transpose(a: &Matrix) -> Matrix {
    let rows = a.len();
    if rows == 0 {
        return Matrix::new();
    }
    let cols = a[0].len();
    (0..cols)
        .map(|j| (0..rows).map(|i| a[i][j]).collect())
        .collect()
}
